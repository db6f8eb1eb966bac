//! Output directory layout.

use std::path::{Component, Path, PathBuf};

use nestdto_config::GenerationOptions;

use crate::naming::Naming;

/// Where each model's files live, relative to the output root.
///
/// Flat: everything directly in the output root. Resource: NestJS resource
/// folders, `<model>/dto/` for DTOs and `<model>/entities/` for the entity.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    naming: Naming<'a>,
    resource: bool,
}

impl<'a> Layout<'a> {
    pub fn new(options: &'a GenerationOptions) -> Self {
        Self {
            naming: Naming::new(options),
            resource: options.output_to_nestjs_resource_structure,
        }
    }

    pub fn dto_dir(&self, model: &str) -> PathBuf {
        self.model_subdir(model, "dto")
    }

    pub fn entity_dir(&self, model: &str) -> PathBuf {
        self.model_subdir(model, "entities")
    }

    fn model_subdir(&self, model: &str, leaf: &str) -> PathBuf {
        if self.resource {
            Path::new(&self.naming.model_dir(model)).join(leaf)
        } else {
            PathBuf::new()
        }
    }
}

/// Relative import specifier from a module in `from_dir` to `module` in
/// `to_dir`. Both directories are relative to the same root.
///
/// ```
/// use std::path::Path;
/// use nestdto_typescript::import_specifier;
///
/// assert_eq!(
///     import_specifier(Path::new("user/dto"), Path::new("post/dto"), "connect-post.dto"),
///     "../../post/dto/connect-post.dto"
/// );
/// assert_eq!(import_specifier(Path::new(""), Path::new(""), "post.entity"), "./post.entity");
/// ```
pub fn import_specifier(from_dir: &Path, to_dir: &Path, module: &str) -> String {
    let from: Vec<Component<'_>> = from_dir.components().collect();
    let to: Vec<Component<'_>> = to_dir.components().collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.push(module.to_string());

    let specifier = parts.join("/");
    if from.len() == common {
        format!("./{}", specifier)
    } else {
        specifier
    }
}

#[cfg(test)]
mod tests {
    use nestdto_config::RawOptions;

    use super::*;

    fn options(pairs: &[(&str, &str)]) -> GenerationOptions {
        let raw: RawOptions = pairs.iter().copied().collect();
        GenerationOptions::normalize(&raw, "out").unwrap()
    }

    #[test]
    fn test_flat_layout() {
        let opts = options(&[]);
        let layout = Layout::new(&opts);
        assert_eq!(layout.dto_dir("UserProfile"), PathBuf::new());
        assert_eq!(layout.entity_dir("UserProfile"), PathBuf::new());
    }

    #[test]
    fn test_resource_layout() {
        let opts = options(&[
            ("outputToNestJsResourceStructure", "true"),
            ("fileNamingStyle", "kebab"),
        ]);
        let layout = Layout::new(&opts);
        assert_eq!(layout.dto_dir("UserProfile"), PathBuf::from("user-profile/dto"));
        assert_eq!(
            layout.entity_dir("UserProfile"),
            PathBuf::from("user-profile/entities")
        );
    }

    #[test]
    fn test_sibling_specifier() {
        assert_eq!(
            import_specifier(Path::new("user/dto"), Path::new("user/dto"), "connect-user.dto"),
            "./connect-user.dto"
        );
    }

    #[test]
    fn test_cousin_specifier() {
        assert_eq!(
            import_specifier(Path::new("user/dto"), Path::new("user/entities"), "user.entity"),
            "../entities/user.entity"
        );
    }
}
