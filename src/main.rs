use osu_api::cli;
use osu_api::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::Cli::run().await
}
