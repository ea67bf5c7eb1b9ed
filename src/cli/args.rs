use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::api::{EventSortType, Ruleset, UserKey};

/// Credentials, overriding the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct AuthArgs {
    /// OAuth client id
    #[arg(long, global = true, env = "OSU_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[arg(long, global = true, env = "OSU_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Bearer token used instead of the client credentials grant
    #[arg(long, global = true, env = "OSU_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
}

/// User command arguments
#[derive(Args, Debug)]
pub struct UserArgs {
    /// User id, or a username (optionally prefixed with '@')
    #[arg(value_parser = parse_user_key)]
    pub user: UserKey,

    /// Ruleset to show statistics for (osu, taiko, fruits, mania)
    #[arg(short, long)]
    pub mode: Option<Ruleset>,
}

/// Numbers are ids, anything else a username.
fn parse_user_key(value: &str) -> Result<UserKey, String> {
    value.parse::<UserKey>().map_err(|e| e.to_string())
}

/// Events command arguments
#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Sort order (id_asc, id_desc)
    #[arg(short, long)]
    pub sort: Option<EventSortType>,

    /// Cursor string returned by a previous page
    #[arg(short, long)]
    pub cursor: Option<String>,
}

/// Beatmap command arguments
#[derive(Args, Debug)]
pub struct BeatmapArgs {
    /// Beatmap id
    pub id: u32,

    /// Also fetch difficulty attributes for this ruleset
    #[arg(short, long)]
    pub attributes: Option<Ruleset>,

    /// Mod acronyms applied to the difficulty attributes (e.g. HD,DT)
    #[arg(long, value_delimiter = ',', requires = "attributes")]
    pub mods: Vec<String>,
}

/// Score command arguments
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Score id
    pub id: u64,
}

/// Replay command arguments
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Score id
    pub id: u64,

    /// File the replay is written to
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Config command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., auth.client_id)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,

    /// Initialize configuration
    Init,
}
