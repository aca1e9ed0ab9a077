use crate::{
    ApiEndpoints, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, LoggingConfig, ServicesConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub services: ServicesConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. SAWIT_CONFIG_DIR env var, else ~/.sawit/
    /// 2. config.toml if it exists, else defaults
    /// 3. SAWIT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load config from an explicit directory. A missing directory or file is
    /// not an error; defaults plus env overrides are used.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SAWIT_CONFIG_DIR env var > ~/.sawit/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }

        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.services.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Endpoint builders over the configured base URLs.
    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(&self.services)
    }

    /// Log configuration summary.
    pub fn log_summary(&self, config_dir: &Path) {
        info!("Configuration loaded from {}:", config_dir.display());
        for (name, url) in self.services.named() {
            info!("  services.{name}: {url}");
        }
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!(
            "  session: {} ({})",
            if self.session.enabled {
                "persistent"
            } else {
                "disabled"
            },
            self.session.path_in(config_dir).display()
        );
    }

    fn apply_env_overrides(&mut self) {
        // Services
        Self::apply_env_url("SAWIT_IDENTITY_SERVICE_URL", &mut self.services.identity);
        Self::apply_env_url(
            "SAWIT_PLANTATION_SERVICE_URL",
            &mut self.services.plantation,
        );
        Self::apply_env_url("SAWIT_HARVEST_SERVICE_URL", &mut self.services.harvest);
        Self::apply_env_url("SAWIT_SHIPMENT_SERVICE_URL", &mut self.services.shipment);
        Self::apply_env_url("SAWIT_PAYROLL_SERVICE_URL", &mut self.services.payroll);

        // Logging
        Self::apply_env_parse("SAWIT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SAWIT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SAWIT_LOG_FILE", &mut self.logging.file);

        // Session
        Self::apply_env_bool("SAWIT_SESSION_ENABLED", &mut self.session.enabled);
        Self::apply_env_string("SAWIT_SESSION_FILE", &mut self.session.file);
    }

    /// Helper: Apply environment variable override for base URLs.
    /// Empty values count as unset; a trailing '/' is dropped.
    fn apply_env_url(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name)
            && !val.trim().is_empty()
        {
            *target = val.trim().trim_end_matches('/').to_string();
        }
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }
}
