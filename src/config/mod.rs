use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::auth::{AccessTokenProvider, ClientCredentialsProvider, StaticTokenProvider};
use crate::api::client::ClientConfig;
use crate::error::{OsuError, Result};

const CONFIG_DIR_NAME: &str = ".osu-api";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "OSU_API_CONFIG_DIR";

/// Keys accepted by [`Config::set`] and [`Config::get`].
pub const CONFIG_KEYS: &[&str] = &[
    "auth.client_id",
    "auth.client_secret",
    "auth.access_token",
    "api.base_url",
    "api.timeout",
];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Credentials. A static access token takes precedence over the client
/// credentials grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Config {
    /// Get the configuration directory
    pub fn config_path() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let home_dir = dirs::home_dir()
            .ok_or_else(|| OsuError::Config("Could not determine home directory".to_string()))?;

        Ok(home_dir.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file full path
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_path()?.join(CONFIG_FILE_NAME))
    }

    /// Initialize configuration directory and file
    pub fn initialize() -> Result<()> {
        Self::initialize_at(&Self::config_path()?)
    }

    /// Create `dir` and a default config file inside it, if missing
    pub fn initialize_at(dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| OsuError::Config(format!("Failed to create config directory: {}", e)))?;

            // Set directory permissions to 0700 on Unix
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
                    .map_err(|e| OsuError::Config(format!("Failed to set directory permissions: {}", e)))?;
            }
        }

        let config_file = dir.join(CONFIG_FILE_NAME);
        if !config_file.exists() {
            Self::default().save_to(&config_file)?;
        }

        Ok(())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::initialize()?;
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| OsuError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&contents)
            .map_err(|e| OsuError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        Self::initialize()?;
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| OsuError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml)
            .map_err(|e| OsuError::Config(format!("Failed to write config file: {}", e)))?;

        // Set file permissions to 0600 on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| OsuError::Config(format!("Failed to set file permissions: {}", e)))?;
        }

        Ok(())
    }

    /// Set a configuration value by key path and save the file
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Set a configuration value by key path without saving
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "auth.client_id" => self.auth.client_id = Some(value.to_string()),
            "auth.client_secret" => self.auth.client_secret = Some(value.to_string()),
            "auth.access_token" => self.auth.access_token = Some(value.to_string()),
            "api.base_url" => {
                url::Url::parse(value)?;
                self.api.base_url = Some(value.to_string());
            }
            "api.timeout" => {
                let timeout = value.parse::<u64>().map_err(|_| {
                    OsuError::InvalidInput(format!("Timeout must be a number of seconds, got '{}'", value))
                })?;
                self.api.timeout = Some(timeout);
            }
            _ => {
                return Err(OsuError::Config(format!("Unknown configuration key: {}", key)));
            }
        }

        Ok(())
    }

    /// Get a configuration value by key path
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "auth.client_id" => self.auth.client_id.clone(),
            "auth.client_secret" => self.auth.client_secret.clone(),
            "auth.access_token" => self.auth.access_token.clone(),
            "api.base_url" => self.api.base_url.clone(),
            "api.timeout" => self.api.timeout.map(|t| t.to_string()),
            _ => None,
        }
    }

    /// Client settings with the configured overrides applied
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.api.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.api.timeout {
            config.timeout = timeout;
        }
        config
    }

    /// Token provider for the configured credentials
    pub fn token_provider(&self) -> Result<Arc<dyn AccessTokenProvider>> {
        if let Some(token) = &self.auth.access_token {
            return Ok(Arc::new(StaticTokenProvider::new(token.clone())));
        }

        match (&self.auth.client_id, &self.auth.client_secret) {
            (Some(id), Some(secret)) => Ok(Arc::new(ClientCredentialsProvider::new(id.clone(), secret.clone())?)),
            _ => Err(OsuError::Credential(
                "No credentials configured (auth.access_token or auth.client_id and auth.client_secret)".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set_value("auth.client_id", "123").unwrap();
        config.set_value("api.timeout", "10").unwrap();

        assert_eq!(config.get("auth.client_id").as_deref(), Some("123"));
        assert_eq!(config.get("api.timeout").as_deref(), Some("10"));
        assert_eq!(config.get("auth.client_secret"), None);
        assert_eq!(config.client_config().timeout, 10);
    }

    #[test]
    fn test_invalid_values() {
        let mut config = Config::default();
        assert!(matches!(config.set_value("api.timeout", "soon"), Err(OsuError::InvalidInput(_))));
        assert!(matches!(config.set_value("api.base_url", "not a url"), Err(OsuError::Url(_))));
        assert!(matches!(config.set_value("unknown.key", "x"), Err(OsuError::Config(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        Config::initialize_at(dir.path()).unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let mut config = Config::default();
        config.set_value("auth.access_token", "token").unwrap();
        config.set_value("api.base_url", "http://localhost:8080/api/v2/").unwrap();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("nested");
        Config::initialize_at(&config_dir).unwrap();

        let dir_mode = fs::metadata(&config_dir).unwrap().permissions().mode();
        let file_mode = fs::metadata(config_dir.join(CONFIG_FILE_NAME)).unwrap().permissions().mode();
        assert_eq!(dir_mode & 0o777, 0o700);
        assert_eq!(file_mode & 0o777, 0o600);
    }

    #[test]
    #[serial]
    fn test_set_persists_to_config_dir() {
        let dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());

        let mut config = Config::load().unwrap();
        config.set("auth.client_id", "42").unwrap();
        let reloaded = Config::load().unwrap();

        std::env::remove_var(CONFIG_DIR_ENV);
        assert_eq!(reloaded.get("auth.client_id").as_deref(), Some("42"));
    }

    #[test]
    fn test_token_provider_selection() {
        let config = Config::default();
        assert!(matches!(config.token_provider().err(), Some(OsuError::Credential(_))));

        let mut config = Config::default();
        config.set_value("auth.client_id", "1").unwrap();
        config.set_value("auth.client_secret", "s").unwrap();
        assert!(config.token_provider().is_ok());
    }
}
