mod board_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod service_config;
mod stage_config;


pub use board_config::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use service_config::ServiceConfig;
pub use stage_config::StageConfig;

const CONFIG_DIR_ENV: &str = "CRM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".crm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_SERVICE_URL: &str = "http://localhost:3001/api";
const DEFAULT_RESOURCE: &str = "leads";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_PAGE_SIZE: u32 = 100;
const MIN_PAGE_SIZE: u32 = 1;
const MAX_PAGE_SIZE: u32 = 1000;
const DEFAULT_SERIALIZE_MOVES: bool = true;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

/// Pipeline stages of a fresh installation, in board order.
const DEFAULT_STAGES: &[(&str, &str)] = &[
    ("new", "New"),
    ("contacted", "Contacted"),
    ("qualified", "Qualified"),
    ("proposal-sent", "Proposal Sent"),
    ("negotiation", "Negotiation"),
    ("won", "Won"),
    ("lost", "Lost"),
];
