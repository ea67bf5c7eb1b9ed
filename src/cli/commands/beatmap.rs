use super::{print_result, Session};
use crate::api::ApiResult;
use crate::cli::args::BeatmapArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{self, Formatter};

/// Execute beatmap command
pub async fn execute(session: &Session, args: BeatmapArgs, format: OutputFormat) -> Result<()> {
    let result = session.client().get_beatmap(args.id, session.cancel()).await?;

    let attributes = match args.attributes {
        Some(ruleset) => {
            let mods: Vec<&str> = args.mods.iter().map(String::as_str).collect();
            match session
                .client()
                .get_difficulty_attributes(args.id, ruleset, &mods, session.cancel())
                .await?
            {
                ApiResult::Success(attributes) => attributes,
                ApiResult::Failure(error) => {
                    eprintln!("{}", output::format_failure(&error));
                    None
                }
            }
        }
        None => None,
    };

    let formatter = Formatter::new(format);
    print_result(result, "beatmap", |beatmap| {
        formatter.format_beatmap(&beatmap, attributes.as_ref())
    })
}
