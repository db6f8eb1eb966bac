//! Generation results.

use std::path::{Path, PathBuf};

use nestdto_core::FileSpec;

/// Files a run will write, before any I/O happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    /// Specs returned by the synthesizer, in synthesis order.
    pub synthesized: Vec<FileSpec>,
    /// Re-export barrels, in first-seen directory order.
    pub barrels: Vec<FileSpec>,
}

impl Plan {
    /// All files: synthesized first, then barrels.
    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.synthesized.iter().chain(&self.barrels)
    }

    pub fn len(&self) -> usize {
        self.synthesized.len() + self.barrels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_files(self) -> Vec<FileSpec> {
        let mut files = self.synthesized;
        files.extend(self.barrels);
        files
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Every written path, sorted.
    pub written: Vec<PathBuf>,
    /// Number of synthesized DTO files.
    pub generated: usize,
    /// Number of re-export barrels.
    pub barrels: usize,
    /// Whether files went through the formatter.
    pub formatted: bool,
    /// Formatter configuration in effect, if one was found.
    pub formatter_config: Option<PathBuf>,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.written.len()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.written.binary_search_by(|p| p.as_path().cmp(path.as_ref())).is_ok()
    }
}
