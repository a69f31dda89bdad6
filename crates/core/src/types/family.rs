use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::impl_case_insensitive_deserialize;

use super::candidate::RuntimeCandidate;

const TYPED_SCRIPT_CANDIDATES: &[&str] = &["bun", "deno", "tsx", "ts-node", "nix-shell"];
const BINARY_MODULE_CANDIDATES: &[&str] = &["wasmer", "wasmtime", "nix-shell"];
const SCRIPT_CANDIDATES: &[&str] = &["bun", "node", "deno", "nix-shell"];

/// Logical grouping of file extensions that share a set of execution engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeFamily {
    /// `.ts`, `.tsx`, `.mts`, `.cts`
    TypedScript,
    /// `.wasm`, `.wat`
    BinaryModule,
    /// `.js`, `.mjs`, `.cjs`
    Script,
}

impl RuntimeFamily {
    pub const ALL: [RuntimeFamily; 3] = [
        RuntimeFamily::TypedScript,
        RuntimeFamily::BinaryModule,
        RuntimeFamily::Script,
    ];

    /// Candidate runtime names in priority order, highest preference first
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            RuntimeFamily::TypedScript => TYPED_SCRIPT_CANDIDATES,
            RuntimeFamily::BinaryModule => BINARY_MODULE_CANDIDATES,
            RuntimeFamily::Script => SCRIPT_CANDIDATES,
        }
    }

    /// The candidate table with each entry's rank attached
    pub fn candidate_table(self) -> impl Iterator<Item = RuntimeCandidate> {
        self.candidates()
            .iter()
            .enumerate()
            .map(|(rank, name)| RuntimeCandidate::new(name, rank))
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuntimeFamily::TypedScript => "typed-script",
            RuntimeFamily::BinaryModule => "binary-module",
            RuntimeFamily::Script => "script",
        }
    }

    /// Short tag used on the command line (`ts`, `wasm`, `js`)
    pub fn short_name(&self) -> &'static str {
        match self {
            RuntimeFamily::TypedScript => "ts",
            RuntimeFamily::BinaryModule => "wasm",
            RuntimeFamily::Script => "js",
        }
    }
}

impl fmt::Display for RuntimeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuntimeFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase();
        RuntimeFamily::ALL
            .into_iter()
            .find(|family| name == family.name() || name == family.short_name())
            .ok_or_else(|| Error::UnsupportedFamily(s.to_string()))
    }
}

impl_case_insensitive_deserialize!(RuntimeFamily);
