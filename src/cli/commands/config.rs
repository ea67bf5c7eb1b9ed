use crate::cli::args::{ConfigArgs, ConfigCommand};
use crate::config::{Config, CONFIG_KEYS};
use crate::error::Result;

/// Execute config command
pub async fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("✅ Configuration updated: {} = {}", key, mask_value(&value));
            Ok(())
        }
        ConfigCommand::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}: {}", key, mask_value(&value));
                }
                None if CONFIG_KEYS.contains(&key.as_str()) => {
                    println!("Configuration key '{}' is not set", key);
                }
                None => {
                    println!("Configuration key '{}' not found", key);
                    println!("Known keys: {}", CONFIG_KEYS.join(", "));
                }
            }
            Ok(())
        }
        ConfigCommand::Path => {
            let path = Config::config_file_path()?;
            println!("Configuration file: {}", path.display());
            Ok(())
        }
        ConfigCommand::Init => {
            Config::initialize()?;
            println!("✅ Configuration initialized");
            println!();
            println!("To set your OAuth client credentials, run:");
            println!("  osu config set auth.client_id YOUR_CLIENT_ID");
            println!("  osu config set auth.client_secret YOUR_CLIENT_SECRET");
            println!();
            println!("Register an OAuth application at: https://osu.ppy.sh/home/account/edit#oauth");
            Ok(())
        }
    }
}

/// Mask sensitive values for display
fn mask_value(value: &str) -> String {
    if value.chars().count() > 10 {
        let prefix: String = value.chars().take(10).collect();
        format!("{}...({} characters)", prefix, value.chars().count())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_value() {
        assert_eq!(mask_value("short"), "short");
        assert_eq!(mask_value("0123456789abcdef"), "0123456789...(16 characters)");
    }
}
