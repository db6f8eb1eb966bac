use std::path::{Path, PathBuf};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Build the file specification rooted at `base`
    fn to_spec(&self, base: &Path) -> FileSpec {
        FileSpec::new(self.path(base), self.render())
    }
}

/// A destination path paired with the source text to be written there.
///
/// File specifications are write-once: there are no setters, and stages that
/// need different content build a new value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    path: PathBuf,
    content: String,
}

impl FileSpec {
    /// Create a new file specification
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the source text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Directory containing the destination path.
    ///
    /// A bare file name lives in the empty (current) directory.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// File name with its final extension removed (`user.entity.ts` -> `user.entity`)
    pub fn module_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Split into path and content
    pub fn into_parts(self) -> (PathBuf, String) {
        (self.path, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Readme;

    impl GeneratedFile for Readme {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("README.md")
        }

        fn render(&self) -> String {
            "# generated\n".to_string()
        }
    }

    #[test]
    fn test_directory() {
        let spec = FileSpec::new("out/user/dto/create-user.dto.ts", "");
        assert_eq!(spec.directory(), Path::new("out/user/dto"));
    }

    #[test]
    fn test_directory_of_bare_file() {
        let spec = FileSpec::new("user.entity.ts", "");
        assert_eq!(spec.directory(), Path::new(""));
    }

    #[test]
    fn test_module_name_strips_only_final_extension() {
        let spec = FileSpec::new("out/user.entity.ts", "");
        assert_eq!(spec.module_name(), "user.entity");

        let spec = FileSpec::new("out/create_user_profile.dto.ts", "");
        assert_eq!(spec.module_name(), "create_user_profile.dto");
    }

    #[test]
    fn test_into_parts() {
        let spec = FileSpec::new("a/b.ts", "content");
        let (path, content) = spec.into_parts();
        assert_eq!(path, PathBuf::from("a/b.ts"));
        assert_eq!(content, "content");
    }

    #[test]
    fn test_generated_file_to_spec() {
        let spec = Readme.to_spec(Path::new("out"));
        assert_eq!(spec.path(), Path::new("out/README.md"));
        assert_eq!(spec.content(), "# generated\n");
    }
}
