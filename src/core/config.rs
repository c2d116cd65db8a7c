use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Token lifetime; fixed TTL applied at issuance.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
    /// Bcrypt cost factor for password hashing (minimum 10).
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Environment variable holding the JWT signing secret. The secret
    /// itself never lives in the config file.
    #[serde(default = "default_jwt_secret_env")]
    pub jwt_secret_env: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_secs: default_token_ttl_secs(),
            bcrypt_cost: default_bcrypt_cost(),
            jwt_secret_env: default_jwt_secret_env(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SeedConfig {
    /// Optional JSON file with provisioned users and catalog services.
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_token_ttl_secs() -> i64 {
    28800 // 8 hours
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_jwt_secret_env() -> String {
    "TALLER_JWT_SECRET".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.auth.token_ttl_secs <= 0 {
            bail!("token_ttl_secs must be greater than 0");
        }

        if self.auth.bcrypt_cost < 10 {
            bail!(
                "bcrypt_cost ({}) must be at least 10",
                self.auth.bcrypt_cost
            );
        }

        if self.auth.bcrypt_cost > 31 {
            bail!("bcrypt_cost ({}) exceeds the bcrypt maximum of 31", self.auth.bcrypt_cost);
        }

        if self.auth.jwt_secret_env.is_empty() {
            bail!("jwt_secret_env must not be empty");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

impl AuthConfig {
    /// Read the JWT signing secret from the configured environment
    /// variable. Fails loudly at startup rather than serving unsigned
    /// sessions.
    pub fn resolve_secret(&self) -> Result<String> {
        let secret = std::env::var(&self.jwt_secret_env).context(format!(
            "JWT signing secret not found in environment variable '{}'",
            self.jwt_secret_env
        ))?;

        if secret.len() < 16 {
            bail!(
                "JWT signing secret from '{}' is too short (minimum 16 bytes)",
                self.jwt_secret_env
            );
        }

        Ok(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        toml::from_str(
            r#"
            [server]
            port = 8080

            [logging]
            level = "info"
            format = "console"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config = base_config();
        assert_eq!(config.auth.token_ttl_secs, 28800);
        assert_eq!(config.auth.bcrypt_cost, 12);
        assert_eq!(config.auth.jwt_secret_env, "TALLER_JWT_SECRET");
        assert!(config.seed.data_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_low_bcrypt_cost() {
        let mut config = base_config();
        config.auth.bcrypt_cost = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = base_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut config = base_config();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_secret_missing_env() {
        let mut config = base_config();
        config.auth.jwt_secret_env = "TALLER_TEST_SECRET_UNSET_VAR".to_string();
        assert!(config.auth.resolve_secret().is_err());
    }
}
