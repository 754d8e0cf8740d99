//! Persisted client settings: service location, feature names, batch size and pacing.

mod config_defaults;
mod config_io;
mod config_types;

pub use config_io::{CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save, save_to_path};
pub use config_types::{ApiSettings, AppConfig, ConfigError, NetworkSettings};
