//! script-runner - Choose a runtime for JavaScript, TypeScript and WebAssembly files
//!
//! This crate provides functionality to:
//! - Classify a script into a runtime family by its file extension
//! - Probe the host for every candidate runtime of that family, in priority order
//! - Partition the candidates into available and unavailable runtimes
//! - Pick the preferred installed runtime and report availability per family
pub mod classifier;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod resolver;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use classifier::classify;
pub use config::{ColorMode, Config};
pub use probe::{CommandProbe, PathProbe};
pub use report::DiagnosticsReport;
pub use resolver::{RuntimeResolver, detect_runtimes};
