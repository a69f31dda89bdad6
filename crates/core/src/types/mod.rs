pub mod candidate;
pub mod family;
pub mod resolution;

// Re-export commonly used types
pub use candidate::RuntimeCandidate;
pub use family::RuntimeFamily;
pub use resolution::ResolutionResult;
