use clap::Parser;
use pretty_assertions::assert_eq;

use osu_api::api::{EventSortType, Ruleset, UserKey};
use osu_api::cli::args::ConfigCommand;
use osu_api::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_user_command() {
    let cli = Cli::try_parse_from(["osu", "user", "@peppy", "--mode", "fruits", "-f", "json"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::User(args) => {
            assert_eq!(args.user, UserKey::Username("peppy".to_string()));
            assert_eq!(args.mode, Some(Ruleset::Catch));
        }
        other => panic!("expected the user command, got {:?}", other),
    }
}

#[test]
fn test_numeric_user_is_an_id() {
    let cli = Cli::try_parse_from(["osu", "u", "2"]).unwrap();
    match cli.command {
        Commands::User(args) => assert_eq!(args.user, UserKey::Id(2)),
        other => panic!("expected the user command, got {:?}", other),
    }
}

#[test]
fn test_events_command() {
    let cli = Cli::try_parse_from(["osu", "events", "--sort", "id_desc", "--cursor", "abc"]).unwrap();
    match cli.command {
        Commands::Events(args) => {
            assert_eq!(args.sort, Some(EventSortType::IdDescending));
            assert_eq!(args.cursor.as_deref(), Some("abc"));
        }
        other => panic!("expected the events command, got {:?}", other),
    }
}

#[test]
fn test_invalid_enum_values_are_rejected() {
    assert!(Cli::try_parse_from(["osu", "user", "2", "--mode", "catch"]).is_err());
    assert!(Cli::try_parse_from(["osu", "events", "--sort", "newest"]).is_err());
}

#[test]
fn test_beatmap_mods_require_a_ruleset() {
    let cli = Cli::try_parse_from(["osu", "beatmap", "75", "--attributes", "osu", "--mods", "HD,DT"]).unwrap();
    match cli.command {
        Commands::Beatmap(args) => {
            assert_eq!(args.attributes, Some(Ruleset::Osu));
            assert_eq!(args.mods, vec!["HD".to_string(), "DT".to_string()]);
        }
        other => panic!("expected the beatmap command, got {:?}", other),
    }

    assert!(Cli::try_parse_from(["osu", "beatmap", "75", "--mods", "HD"]).is_err());
}

#[test]
fn test_replay_requires_output() {
    assert!(Cli::try_parse_from(["osu", "replay", "5"]).is_err());

    let cli = Cli::try_parse_from(["osu", "replay", "5", "-o", "replay.osr"]).unwrap();
    match cli.command {
        Commands::Replay(args) => {
            assert_eq!(args.id, 5);
            assert_eq!(args.output.to_str(), Some("replay.osr"));
        }
        other => panic!("expected the replay command, got {:?}", other),
    }
}

#[test]
fn test_config_command() {
    let cli = Cli::try_parse_from(["osu", "config", "set", "auth.client_id", "123"]).unwrap();
    match cli.command {
        Commands::Config(args) => match args.command {
            ConfigCommand::Set { key, value } => {
                assert_eq!(key, "auth.client_id");
                assert_eq!(value, "123");
            }
            other => panic!("expected config set, got {:?}", other),
        },
        other => panic!("expected the config command, got {:?}", other),
    }
}

#[test]
fn test_credentials_on_command_line() {
    let cli = Cli::try_parse_from(["osu", "score", "1", "--access-token", "abc"]).unwrap();
    assert_eq!(cli.auth.access_token.as_deref(), Some("abc"));
}

#[test]
fn test_plain_username_and_numeric_looking_names() {
    let cli = Cli::try_parse_from(["osu", "user", "peppy"]).unwrap();
    match cli.command {
        Commands::User(args) => assert_eq!(args.user, UserKey::Username("peppy".to_string())),
        other => panic!("expected the user command, got {:?}", other),
    }

    let cli = Cli::try_parse_from(["osu", "user", "@2"]).unwrap();
    match cli.command {
        Commands::User(args) => assert_eq!(args.user, UserKey::Username("2".to_string())),
        other => panic!("expected the user command, got {:?}", other),
    }
}
