use crate::{
    BoardConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ServiceConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for CRM_CONFIG_DIR env var, else use ./.crm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CRM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

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
    /// Priority: CRM_CONFIG_DIR env var > ./.crm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.service.validate()?;
        self.board.validate()?;
        Ok(())
    }

    /// Log configuration summary (never logs the auth token).
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  service: {}/{} (timeout {}s, auth: {})",
            self.service.base_url,
            self.service.resource,
            self.service.timeout_secs,
            if self.service.auth_token.is_some() {
                "bearer"
            } else {
                "none"
            }
        );
        debug!(
            "  board: {} stages, page_size={}, serialize_moves={}",
            self.board.stages.len(),
            self.board.page_size,
            self.board.serialize_moves
        );
        debug!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Service
        Self::apply_env_string("CRM_SERVICE_URL", &mut self.service.base_url);
        Self::apply_env_string("CRM_SERVICE_RESOURCE", &mut self.service.resource);
        Self::apply_env_parse(
            "CRM_SERVICE_TIMEOUT_SECS",
            &mut self.service.timeout_secs,
        );
        Self::apply_env_option_string("CRM_SERVICE_TOKEN", &mut self.service.auth_token);

        // Board
        Self::apply_env_parse("CRM_BOARD_PAGE_SIZE", &mut self.board.page_size);
        Self::apply_env_bool(
            "CRM_BOARD_SERIALIZE_MOVES",
            &mut self.board.serialize_moves,
        );

        // Logging
        Self::apply_env_parse("CRM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CRM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CRM_LOG_FILE", &mut self.logging.file);
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
            *target = Some(val);
        }
    }
}
