//! Host executable lookup used to decide whether a runtime is installed

use std::ffi::OsString;

/// Tests whether an executable can be resolved on the host.
///
/// Implementations must only check resolvability; the program is never run.
pub trait CommandProbe: Send + Sync {
    fn command_exists(&self, name: &str) -> bool;
}

impl<F> CommandProbe for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn command_exists(&self, name: &str) -> bool {
        self(name)
    }
}

/// Looks commands up on the executable search path.
///
/// Without an explicit search path the host `PATH` is read on every probe,
/// so tools installed mid-session are picked up.
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search the given path list instead of `PATH`
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    pub fn search_path(&self) -> Option<&OsString> {
        self.search_path.as_ref()
    }
}

impl CommandProbe for PathProbe {
    fn command_exists(&self, name: &str) -> bool {
        let found = match &self.search_path {
            Some(paths) => which::which_in_global(name, Some(paths))
                .map(|mut matches| matches.next().is_some())
                .unwrap_or(false),
            None => which::which(name).is_ok(),
        };
        tracing::trace!("Probe {}: {}", name, if found { "found" } else { "missing" });
        found
    }
}
