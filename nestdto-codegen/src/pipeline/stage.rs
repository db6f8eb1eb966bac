//! Pipeline stages.

use std::fmt;

/// A stage of a generation run, in execution order.
///
/// Stages only label log events; the pipeline always runs them in this order
/// and stops at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Raw options to [`GenerationOptions`](nestdto_config::GenerationOptions).
    Normalize,
    /// Schema to DTO file specs.
    Synthesize,
    /// Re-export barrels per directory.
    Aggregate,
    /// One-time formatter configuration lookup.
    ResolveFormatter,
    /// Concurrent format and write.
    Write,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Normalize,
        Stage::Synthesize,
        Stage::Aggregate,
        Stage::ResolveFormatter,
        Stage::Write,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Normalize => "normalize",
            Stage::Synthesize => "synthesize",
            Stage::Aggregate => "aggregate",
            Stage::ResolveFormatter => "resolve-formatter",
            Stage::Write => "write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
