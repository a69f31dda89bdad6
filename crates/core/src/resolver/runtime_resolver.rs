use std::path::Path;

use tracing::{debug, trace};

use crate::{
    classifier::classify,
    error::{Error, Result},
    probe::{CommandProbe, PathProbe},
    report::DiagnosticsReport,
    types::{ResolutionResult, RuntimeFamily},
};

/// Resolves which runtimes of a family are installed on the host.
///
/// Results are never cached: every call re-probes the host, so runtimes
/// installed or removed between calls are observed.
pub struct RuntimeResolver<P = PathProbe> {
    probe: P,
}

impl RuntimeResolver<PathProbe> {
    /// Create a resolver backed by the host `PATH`
    pub fn new() -> Self {
        Self {
            probe: PathProbe::new(),
        }
    }
}

impl Default for RuntimeResolver<PathProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CommandProbe> RuntimeResolver<P> {
    /// Create a resolver with a custom probe
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Probe every candidate of `family` once, in priority order
    pub fn resolve(&self, family: RuntimeFamily) -> ResolutionResult {
        let mut result = ResolutionResult::new(family);

        for candidate in family.candidate_table() {
            if self.probe.command_exists(candidate.name) {
                trace!("{} runtime #{} available: {}", family, candidate.rank, candidate.name);
                result.available.push(candidate.name.to_string());
            } else {
                trace!("{} runtime #{} missing: {}", family, candidate.rank, candidate.name);
                result.unavailable.push(candidate.name.to_string());
            }
        }

        debug!(
            "Resolved {} runtimes: available=[{}] unavailable=[{}]",
            family,
            result.available.join(" "),
            result.unavailable.join(" ")
        );
        result
    }

    /// Resolve a family given by name (`typed-script`, `ts`, `script`, ...)
    pub fn resolve_named(&self, family: &str) -> Result<ResolutionResult> {
        let family = family.parse::<RuntimeFamily>()?;
        Ok(self.resolve(family))
    }

    /// Classify `file_path` and resolve the runtimes for its family.
    ///
    /// Classification failure returns before any probe runs.
    pub fn detect_runtimes(&self, file_path: impl AsRef<Path>) -> Result<ResolutionResult> {
        let family = classify(file_path)?;
        Ok(self.resolve(family))
    }

    /// Choose the runtime to execute `file_path` with: the highest priority
    /// candidate that is installed
    pub fn select(&self, file_path: impl AsRef<Path>) -> Result<String> {
        let result = self.detect_runtimes(file_path)?;
        match result.preferred() {
            Some(runtime) => {
                debug!("Selected {} for {} file", runtime, result.family);
                Ok(runtime.to_string())
            }
            None => Err(Error::NoRuntimeAvailable {
                family: result.family,
                tried: result.unavailable,
            }),
        }
    }

    /// Resolve each requested family, in the order given
    pub fn diagnose(&self, families: &[RuntimeFamily]) -> DiagnosticsReport {
        let entries = families.iter().map(|family| self.resolve(*family)).collect();
        DiagnosticsReport::new(entries)
    }
}

/// Detect runtimes for a file using the host `PATH`
pub fn detect_runtimes(file_path: impl AsRef<Path>) -> Result<ResolutionResult> {
    RuntimeResolver::new().detect_runtimes(file_path)
}
