use serde::Serialize;

use super::family::RuntimeFamily;
use crate::error::Result;

/// Partition of a family's candidates into present and absent runtimes.
///
/// Both lists keep the priority order of the family's candidate table, and
/// together they hold every candidate exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub family: RuntimeFamily,
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
}

impl ResolutionResult {
    pub fn new(family: RuntimeFamily) -> Self {
        Self {
            family,
            available: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// The highest priority runtime that is present on the host
    pub fn preferred(&self) -> Option<&str> {
        self.available.first().map(String::as_str)
    }

    pub fn has_available(&self) -> bool {
        !self.available.is_empty()
    }

    /// Every candidate of the family in declared priority order
    pub fn candidates(&self) -> &'static [&'static str] {
        self.family.candidates()
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.available.iter().any(|n| n == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
