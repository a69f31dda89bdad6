//! Runtime availability report across several families

use serde::Serialize;

use crate::error::Result;
use crate::types::{ResolutionResult, RuntimeFamily};

/// Families reported when nothing else is requested. Binary modules are
/// resolvable but left out of the default report.
pub const DEFAULT_REPORT_FAMILIES: [RuntimeFamily; 2] =
    [RuntimeFamily::Script, RuntimeFamily::TypedScript];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    entries: Vec<ResolutionResult>,
}

impl DiagnosticsReport {
    pub fn new(entries: Vec<ResolutionResult>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ResolutionResult] {
        &self.entries
    }

    pub fn get(&self, family: RuntimeFamily) -> Option<&ResolutionResult> {
        self.entries.iter().find(|entry| entry.family == family)
    }

    /// Families for which no candidate is installed
    pub fn missing_families(&self) -> Vec<RuntimeFamily> {
        self.entries
            .iter()
            .filter(|entry| !entry.has_available())
            .map(|entry| entry.family)
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
