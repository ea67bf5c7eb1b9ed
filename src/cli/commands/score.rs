use super::{print_result, Session};
use crate::cli::args::ScoreArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;

/// Execute score command
pub async fn execute(session: &Session, args: ScoreArgs, format: OutputFormat) -> Result<()> {
    let result = session.client().get_score(args.id, session.cancel()).await?;

    let formatter = Formatter::new(format);
    print_result(result, "score", |score| formatter.format_score(&score))
}
