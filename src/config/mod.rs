//! Configuration loading for the catalog client and terminal UI.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
