use colored::*;
use log::debug;

use super::Session;
use crate::api::ApiResult;
use crate::cli::args::ReplayArgs;
use crate::error::Result;
use crate::output;

/// Execute replay command
pub async fn execute(session: &Session, args: ReplayArgs) -> Result<()> {
    match session.client().get_replay(args.id, session.cancel()).await? {
        ApiResult::Success(Some(bytes)) => {
            debug!("Writing {} bytes to {}", bytes.len(), args.output.display());
            tokio::fs::write(&args.output, &bytes).await?;
            println!(
                "{} Replay saved: {} ({} bytes)",
                "✅".green(),
                args.output.display(),
                bytes.len()
            );
        }
        ApiResult::Success(None) => println!("No replay returned"),
        ApiResult::Failure(error) => eprintln!("{}", output::format_failure(&error)),
    }
    Ok(())
}
