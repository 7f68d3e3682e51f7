//! Configuration management

mod settings;

pub use settings::{config_dir, AppConfig};
