use crate::{
    error::{Error, Result},
    impl_case_insensitive_deserialize,
    report::DEFAULT_REPORT_FAMILIES,
    types::RuntimeFamily,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".script-runner.json", "script-runner.json"];

/// When to style terminal output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(Error::ConfigError(format!(
                "unknown color mode '{s}', expected one of: auto, always, never"
            ))),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        })
    }
}

impl_case_insensitive_deserialize!(ColorMode);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Emit debug logging
    pub verbose: bool,

    pub color: ColorMode,

    /// Families listed by the diagnostics report
    pub report_families: Vec<RuntimeFamily>,

    /// Executable search path used instead of `PATH`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: ColorMode::default(),
            report_families: DEFAULT_REPORT_FAMILIES.to_vec(),
            search_path: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk from `start_path` towards the filesystem root and return the
    /// first config file found
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }
}
