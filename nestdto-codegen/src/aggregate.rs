//! Re-export barrel aggregation.
//!
//! Groups generated files by directory and derives one `index` module per
//! directory that re-exports every sibling. This is a pure fold over the
//! synthesized list; nothing here touches the file system.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use nestdto_core::FileSpec;

/// Render the re-export statement for a sibling module.
pub fn reexport_line(module: &str) -> String {
    format!("export * from './{}';", module)
}

/// Accumulates one barrel file per directory.
///
/// Each directory maps to a single [`FileSpec`]. Adding a file replaces that
/// entry with a new spec whose content is the previous content plus one more
/// re-export line, so earlier specs are never mutated.
#[derive(Debug, Clone)]
pub struct IndexCollection {
    file_name: String,
    entries: IndexMap<PathBuf, FileSpec>,
}

impl IndexCollection {
    /// Create an empty collection producing `index.<extension>` barrels.
    pub fn new(extension: &str) -> Self {
        Self {
            file_name: format!("index.{}", extension),
            entries: IndexMap::new(),
        }
    }

    /// Record a generated file in its directory's barrel.
    pub fn add(&mut self, file: &FileSpec) {
        let directory = file.directory();
        let line = reexport_line(&file.module_name());

        let next = match self.entries.get(directory) {
            Some(barrel) => FileSpec::new(barrel.path(), format!("{}\n{}", barrel.content(), line)),
            None => FileSpec::new(directory.join(&self.file_name), line),
        };
        self.entries.insert(directory.to_path_buf(), next);
    }

    /// Get the barrel for a directory.
    pub fn get(&self, directory: &Path) -> Option<&FileSpec> {
        self.entries.get(directory)
    }

    /// Number of directories with a barrel.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no file has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the collection, yielding barrels in first-seen directory order.
    pub fn into_files(self) -> Vec<FileSpec> {
        self.entries.into_values().collect()
    }
}

/// Build one barrel per distinct directory among `files`.
pub fn collect_barrels(files: &[FileSpec], extension: &str) -> Vec<FileSpec> {
    files
        .iter()
        .fold(IndexCollection::new(extension), |mut barrels, file| {
            barrels.add(file);
            barrels
        })
        .into_files()
}
