use anyhow::{Context as _, Result};
use script_runner_core::{
    ColorMode, Config, PathProbe, RuntimeResolver,
    config::{LoadedConfig, load_config},
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Effective settings for one invocation: the discovered config file with
/// command line flags applied on top
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub config_source: Option<PathBuf>,
}

impl Context {
    /// Discover config from the current directory
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, global)
    }

    /// Defaults plus command line flags, without reading any config file
    pub fn from_flags(global: &GlobalArgs) -> Self {
        Self::with_overrides(Config::default(), None, global)
    }

    pub fn load_from(start: &Path, global: &GlobalArgs) -> Result<Self> {
        let LoadedConfig { config, source } = load_config(start).context("Failed to load config")?;
        Ok(Self::with_overrides(config, source, global))
    }

    pub fn with_overrides(mut config: Config, source: Option<PathBuf>, global: &GlobalArgs) -> Self {
        if global.verbose {
            config.verbose = true;
        }
        if let Some(search_path) = &global.search_path {
            config.search_path = Some(search_path.clone());
        }
        if let Some(color) = global.color {
            config.color = color;
        }

        Self {
            config,
            config_source: source,
        }
    }

    pub fn resolver(&self) -> RuntimeResolver<PathProbe> {
        let probe = match &self.config.search_path {
            Some(search_path) => PathProbe::with_search_path(search_path),
            None => PathProbe::new(),
        };
        RuntimeResolver::with_probe(probe)
    }

    pub fn use_color(&self) -> bool {
        match self.config.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use script_runner_core::RuntimeFamily;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".script-runner.json"),
            r#"{ "color": "always", "search_path": "/from/config", "report_families": ["wasm"] }"#,
        )
        .unwrap();

        let global = GlobalArgs {
            verbose: true,
            search_path: Some("/from/flag".to_string()),
            color: Some(ColorMode::Never),
        };
        let context = Context::load_from(temp_dir.path(), &global).unwrap();

        assert!(context.config.verbose);
        assert_eq!(context.config.search_path.as_deref(), Some("/from/flag"));
        assert!(!context.use_color());
        assert_eq!(context.config.report_families, vec![RuntimeFamily::BinaryModule]);
        assert_eq!(
            context.config_source,
            Some(temp_dir.path().join(".script-runner.json"))
        );
    }

    #[test]
    fn test_from_flags_ignores_config_file() {
        let global = GlobalArgs {
            verbose: true,
            search_path: None,
            color: Some(ColorMode::Always),
        };
        let context = Context::from_flags(&global);

        assert!(context.config_source.is_none());
        assert!(context.config.verbose);
        assert!(context.use_color());
        assert_eq!(context.config.report_families, Config::default().report_families);
    }

    #[test]
    fn test_config_file_used_without_flags() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("script-runner.json"),
            r#"{ "color": "always", "search_path": "/from/config" }"#,
        )
        .unwrap();

        let context = Context::load_from(temp_dir.path(), &GlobalArgs::default()).unwrap();

        assert!(!context.config.verbose);
        assert!(context.use_color());
        assert_eq!(
            context.resolver().probe().search_path().map(|p| p.to_string_lossy().into_owned()),
            Some("/from/config".to_string())
        );
    }
}
