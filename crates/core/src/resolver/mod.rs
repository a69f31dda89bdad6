//! Runtime resolution: probe each family candidate and partition the table

mod runtime_resolver;

pub use runtime_resolver::{RuntimeResolver, detect_runtimes};
