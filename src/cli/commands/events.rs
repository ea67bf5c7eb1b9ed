use super::{print_result, Session};
use crate::cli::args::EventsArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;

/// Execute events command
pub async fn execute(session: &Session, args: EventsArgs, format: OutputFormat) -> Result<()> {
    let result = session
        .client()
        .get_events(args.sort, args.cursor.as_deref(), session.cancel())
        .await?;

    let formatter = Formatter::new(format);
    print_result(result, "events", |bundle| formatter.format_events(&bundle))
}
