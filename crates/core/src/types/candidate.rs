use serde::Serialize;

/// One executable engine able to run files of a family, with its priority
/// rank inside that family's table (0 is the most preferred).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimeCandidate {
    pub name: &'static str,
    pub rank: usize,
}

impl RuntimeCandidate {
    pub fn new(name: &'static str, rank: usize) -> Self {
        Self { name, rank }
    }
}
