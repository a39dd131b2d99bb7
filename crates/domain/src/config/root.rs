use super::logging::LOG_LEVELS;
use super::{
    ConfigError, DnsConfig, HttpConfig, LoggingConfig, PluginsConfig, ResolverConfig,
    ServerConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "carbon-txt.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub plugins: PluginsConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub http_timeout: Option<f64>,
    pub user_agent: Option<String>,
    pub log_level: Option<String>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub active_plugins: Option<Vec<String>>,
}

impl Config {
    /// Loads the config file (explicit path, or [`DEFAULT_CONFIG_FILE`] if it
    /// exists), then applies CLI overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.http_timeout {
            self.http.timeout_secs = timeout;
        }
        if let Some(user_agent) = overrides.user_agent {
            self.http.user_agent = Some(user_agent);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(active) = overrides.active_plugins {
            self.plugins.active = active;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.http.timeout_secs.is_finite() && self.http.timeout_secs > 0.0) {
            return Err(ConfigError::Validation(format!(
                "http.timeout_secs must be a positive number, got {}",
                self.http.timeout_secs
            )));
        }

        if !(self.dns.timeout_secs.is_finite() && self.dns.timeout_secs > 0.0) {
            return Err(ConfigError::Validation(format!(
                "dns.timeout_secs must be a positive number, got {}",
                self.dns.timeout_secs
            )));
        }

        if let Some(user_agent) = &self.http.user_agent {
            if user_agent.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "http.user_agent cannot be empty".to_string(),
                ));
            }
        }

        if self.resolver.max_delegation_hops == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_delegation_hops must be at least 1".to_string(),
            ));
        }

        crate::validators::validate_url(&self.resolver.public_suffix_list_url)
            .map_err(|e| ConfigError::Validation(format!("resolver.public_suffix_list_url: {e}")))?;

        self.dns
            .nameserver_addrs()
            .map_err(ConfigError::Validation)?;

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http.timeout_secs, 5.0);
        assert_eq!(config.resolver.max_delegation_hops, 5);
        assert!(config.http.effective_user_agent().starts_with("CarbonTxtValidator/"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [http]
            timeout_secs = 2.5

            [dns]
            nameservers = ["127.0.0.1:5353"]

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.timeout_secs, 2.5);
        assert_eq!(config.http.max_redirects, 10);
        assert_eq!(config.dns.nameserver_addrs().unwrap()[0].port(), 5353);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config::default();
        config.apply_overrides(CliOverrides {
            http_timeout: Some(1.0),
            user_agent: Some("test-agent".to_string()),
            port: Some(9000),
            ..Default::default()
        });

        assert_eq!(config.http.timeout_secs, 1.0);
        assert_eq!(config.http.effective_user_agent(), "test-agent");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.http.timeout_secs = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.resolver.max_delegation_hops = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.dns.nameservers = vec!["not-an-ip".to_string()];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::load(Some("/nonexistent/carbon-txt.toml"), CliOverrides::default());
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
