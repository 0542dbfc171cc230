mod config;
mod error;
mod file;

pub const CONFIG_FILE_NAME: &str = ".changed-tests.toml";

pub use config::{Config, load_config, parse_config};
pub use error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;
