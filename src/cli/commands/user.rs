use super::{print_result, Session};
use crate::cli::args::UserArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;

/// Execute user command
pub async fn execute(session: &Session, args: UserArgs, format: OutputFormat) -> Result<()> {
    let result = session
        .client()
        .get_user(args.user, args.mode, session.cancel())
        .await?;

    let formatter = Formatter::new(format);
    print_result(result, "user", |user| formatter.format_user(&user))
}
