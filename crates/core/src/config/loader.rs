//! Config discovery from the filesystem

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::Result;

/// A config together with the file it was read from, if any
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Load the nearest config file at or above `start`, falling back to the
/// defaults when none exists
pub fn load_config(start: &Path) -> Result<LoadedConfig> {
    match Config::find_config_file(start) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            let config = Config::load_from_file(&path)?;
            Ok(LoadedConfig {
                config,
                source: Some(path),
            })
        }
        None => {
            tracing::debug!("No config file found from {}", start.display());
            Ok(LoadedConfig {
                config: Config::default(),
                source: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuntimeFamily;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = load_config(temp_dir.path()).unwrap();

        assert!(loaded.source.is_none());
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_load_from_discovered_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".script-runner.json");
        fs::write(&config_path, r#"{ "report_families": ["js"] }"#).unwrap();

        let loaded = load_config(temp_dir.path()).unwrap();
        assert_eq!(loaded.source, Some(config_path));
        assert_eq!(loaded.config.report_families, vec![RuntimeFamily::Script]);
    }
}
