use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub contact: ContactConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Destination for form submissions, e.g. a deployed Apps Script web app
    /// URL ending in `/exec`. Empty means no endpoint is configured and
    /// submissions fall back to a simulated delivery delay.
    pub endpoint_url: String,
    pub simulated_delay_ms: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub default_mode: String,
    /// Where the light/dark preference is persisted across restarts.
    /// Empty disables persistence.
    pub state_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            contact: ContactConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            simulated_delay_ms: 1500,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: "light".to_string(),
            state_file: PathBuf::from("./theme.state"),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("SITE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if !self.contact.endpoint_url.is_empty() {
            let url = url::Url::parse(&self.contact.endpoint_url).map_err(|e| {
                ConfigError::Message(format!("Invalid contact endpoint URL: {}", e))
            })?;

            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::Message(
                    "Contact endpoint URL must be http or https".to_string(),
                ));
            }
        }

        if self.contact.request_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Contact request timeout must be greater than 0".to_string(),
            ));
        }

        if self.theme.default_mode != "light" && self.theme.default_mode != "dark" {
            return Err(ConfigError::Message(
                "Theme default mode must be 'light' or 'dark'".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.contact.endpoint_url.is_empty());
        assert_eq!(config.contact.simulated_delay_ms, 1500);
        assert_eq!(config.theme.default_mode, "light");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.server.port = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.contact.endpoint_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.contact.endpoint_url = "ftp://example.com/exec".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.contact.endpoint_url = "https://script.google.com/macros/s/abc/exec".to_string();
        assert!(config.validate().is_ok());

        config = AppConfig::default();
        config.theme.default_mode = "solarized".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");

        let mut config = AppConfig::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
