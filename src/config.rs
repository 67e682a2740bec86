//! Configuration management for Bookshelf server

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Load the built-in records at startup
    pub seed: bool,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder(&run_mode)?
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Environment variables, e.g. `BOOKSHELF_SERVER__PORT`
    fn environment() -> Environment {
        Environment::with_prefix("BOOKSHELF")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Defaults layered with the optional `config/default` and `config/{run_mode}` files
    fn builder(run_mode: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = AppConfig::default();

        Ok(Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .set_default("catalog.seed", defaults.catalog.seed)?
            // Start with the shared configuration file
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false)))
    }

    /// Address string the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8084,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_local_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8084");
        assert!(config.catalog.seed);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn file_defaults_match_struct_defaults() {
        let config: AppConfig = AppConfig::builder("no-such-mode")
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("defaults should deserialize");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn environment_overrides_files() {
        let mut vars = config::Map::new();
        vars.insert("BOOKSHELF_SERVER__PORT".to_string(), "9090".to_string());
        vars.insert("BOOKSHELF_CATALOG__SEED".to_string(), "false".to_string());

        let config: AppConfig = AppConfig::builder("no-such-mode")
            .and_then(|b| b.add_source(AppConfig::environment().source(Some(vars))).build())
            .and_then(|c| c.try_deserialize())
            .expect("overridden config should deserialize");

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.catalog.seed);
    }
}
