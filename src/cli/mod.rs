pub mod args;
pub mod commands;

use clap::{Parser, Subcommand};

/// Command line client for the osu! API v2
#[derive(Parser, Debug)]
#[command(
    name = "osu",
    about = "Query the osu! API v2 from the terminal",
    version,
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub auth: args::AuthArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user profile
    #[command(alias = "u")]
    User(args::UserArgs),

    /// Show the global event feed
    #[command(alias = "e")]
    Events(args::EventsArgs),

    /// Show a beatmap
    #[command(alias = "b")]
    Beatmap(args::BeatmapArgs),

    /// Show a score
    #[command(alias = "s")]
    Score(args::ScoreArgs),

    /// Download the replay of a score
    #[command(alias = "r")]
    Replay(args::ReplayArgs),

    /// Manage configuration
    #[command(alias = "c")]
    Config(args::ConfigArgs),
}

impl Cli {
    async fn run_api_command(
        command: Commands,
        auth: &args::AuthArgs,
        format: OutputFormat,
        verbose: bool,
    ) -> crate::error::Result<()> {
        let session = commands::Session::connect(auth)?;
        let result = match command {
            Commands::User(args) => commands::user::execute(&session, args, format).await,
            Commands::Events(args) => commands::events::execute(&session, args, format).await,
            Commands::Beatmap(args) => commands::beatmap::execute(&session, args, format).await,
            Commands::Score(args) => commands::score::execute(&session, args, format).await,
            Commands::Replay(args) => commands::replay::execute(&session, args).await,
            Commands::Config(args) => commands::config::execute(args).await,
        };
        if verbose {
            eprintln!("{}", session.stats_report());
        }
        result
    }

    /// Run the CLI application
    pub async fn run() -> crate::error::Result<()> {
        let cli = Self::parse();

        // Set up logging
        if cli.verbose {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
        } else {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
        }

        let result = match cli.command {
            Commands::Config(args) => commands::config::execute(args).await,
            command => Self::run_api_command(command, &cli.auth, cli.format, cli.verbose).await,
        };

        // Handle errors with better messaging
        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("Error: {}", e);
                if cli.verbose {
                    if let Some(source) = std::error::Error::source(&e) {
                        eprintln!("Caused by: {}", source);
                    }
                }
                if let Some(hint) = e.hint() {
                    eprintln!("\nHint: {}", hint);
                }
                Err(e)
            }
        }
    }
}
