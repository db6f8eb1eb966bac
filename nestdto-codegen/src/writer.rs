//! Concurrent file write-out.
//!
//! Each file spec becomes its own task: create the parent directory, format
//! if requested, write. Tasks share nothing but the read-only formatter and
//! never target the same path, so they run without coordination.

use std::path::PathBuf;

use futures::future::try_join_all;
use nestdto_core::FileSpec;
use tracing::debug;

use crate::{GenerateError, Result, format::Formatting};

/// Write every file, formatting through `formatting` when present.
///
/// Returns the written paths in input order. The first failure is returned as
/// soon as it happens; tasks already running are left to finish on their
/// own and nothing is rolled back.
pub async fn write_all(files: Vec<FileSpec>, formatting: Option<Formatting>) -> Result<Vec<PathBuf>> {
    let tasks = files.into_iter().map(|file| {
        let formatting = formatting.clone();
        let handle = tokio::spawn(async move { write_file(file, formatting.as_ref()).await });
        async move { handle.await? }
    });

    try_join_all(tasks).await
}

/// Write a single file.
pub async fn write_file(file: FileSpec, formatting: Option<&Formatting>) -> Result<PathBuf> {
    let (path, content) = file.into_parts();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| GenerateError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let content = match formatting {
        Some(formatting) => formatting
            .format(&content, &path)
            .await
            .map_err(|e| GenerateError::Format {
                path: path.clone(),
                source: e.into(),
            })?,
        None => content,
    };

    tokio::fs::write(&path, content)
        .await
        .map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        })?;

    debug!(path = %path.display(), formatted = formatting.is_some(), "wrote file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path, sync::Arc, time::Duration};

    use async_trait::async_trait;
    use eyre::eyre;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        format::{Formatter, FormatterConfig},
        testing::{FailingFormatter, UppercaseFormatter},
    };

    /// Rejects one path, passes every other file through unchanged.
    struct RejectPath(PathBuf);

    #[async_trait]
    impl Formatter for RejectPath {
        fn name(&self) -> &'static str {
            "reject-path"
        }

        async fn resolve_config(&self, _path: &Path) -> eyre::Result<Option<FormatterConfig>> {
            Ok(None)
        }

        async fn format(
            &self,
            source: &str,
            filepath: &Path,
            _config: Option<&FormatterConfig>,
        ) -> eyre::Result<String> {
            if filepath == self.0 {
                return Err(eyre!("cannot format '{}'", filepath.display()));
            }
            Ok(source.to_string())
        }
    }

    #[tokio::test]
    async fn test_creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user/dto/create-user.dto.ts");

        let written = write_all(vec![FileSpec::new(&path, "export class A {}")], None)
            .await
            .unwrap();

        assert_eq!(written, vec![path.clone()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export class A {}");
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.entity.ts");
        fs::write(&path, "stale").unwrap();

        write_all(vec![FileSpec::new(&path, "fresh")], None)
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[tokio::test]
    async fn test_writes_verbatim_without_formatter() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.ts");
        let content = "\nexport * from './a';";

        write_all(vec![FileSpec::new(&path, content)], None)
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[tokio::test]
    async fn test_formats_before_writing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.ts");
        let formatting = Formatting::new(Arc::new(UppercaseFormatter::default()), None);

        write_all(vec![FileSpec::new(&path, "export class a {}")], Some(formatting))
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "EXPORT CLASS A {}");
    }

    #[tokio::test]
    async fn test_format_failure_aborts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.ts");
        let formatting = Formatting::new(Arc::new(FailingFormatter), None);

        let err = write_all(vec![FileSpec::new(&path, "x")], Some(formatting))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateError::Format { path: ref p, .. } if p == &path));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_one_format_failure_keeps_other_writes() {
        let temp = TempDir::new().unwrap();
        let bad = temp.path().join("b/broken.ts");
        let good: Vec<_> = (0..6)
            .map(|i| temp.path().join(format!("d{}/f{}.ts", i % 2, i)))
            .collect();
        let mut files: Vec<_> = good.iter().map(|p| FileSpec::new(p, "ok")).collect();
        files.insert(3, FileSpec::new(&bad, "broken"));
        let formatting = Formatting::new(Arc::new(RejectPath(bad.clone())), None);

        let err = write_all(files, Some(formatting)).await.unwrap_err();

        assert!(matches!(err, GenerateError::Format { path: ref p, .. } if p == &bad));
        assert!(!bad.exists());

        // the remaining tasks finish on their own after the error surfaced
        for _ in 0..200 {
            if good.iter().all(|p| fs::read_to_string(p).is_ok_and(|c| c == "ok")) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        for path in &good {
            assert_eq!(fs::read_to_string(path).unwrap(), "ok");
        }
    }

    #[tokio::test]
    async fn test_io_failure_aborts() {
        let temp = TempDir::new().unwrap();
        // a regular file where a directory is expected
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_all(vec![FileSpec::new(blocker.join("a.ts"), "x")], None)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateError::Io { .. }));
    }

    #[tokio::test]
    async fn test_many_files() {
        let temp = TempDir::new().unwrap();
        let files: Vec<_> = (0..32)
            .map(|i| FileSpec::new(temp.path().join(format!("d{}/f{}.ts", i % 4, i)), i.to_string()))
            .collect();

        let written = write_all(files, None).await.unwrap();

        assert_eq!(written.len(), 32);
        for (i, path) in written.iter().enumerate() {
            assert_eq!(fs::read_to_string(path).unwrap(), i.to_string());
        }
    }
}
