//! Configuration management for script-runner

mod loader;
mod settings;

// Re-export main types
pub use loader::{LoadedConfig, load_config};
pub use settings::{CONFIG_FILE_NAMES, ColorMode, Config};
