//! External formatter integration.
//!
//! Formatter configuration is resolved once per run and shared with every
//! file's format call through [`Formatting`].

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Stdio,
    sync::Arc,
};

use async_trait::async_trait;
use eyre::{Result, WrapErr, eyre};
use tokio::{io::AsyncWriteExt, process::Command};

/// Environment variable overriding the prettier executable.
pub const PRETTIER_ENV: &str = "NESTDTO_PRETTIER";

/// Resolved formatter configuration.
///
/// Opaque to the pipeline; only the formatter that produced it reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    path: PathBuf,
}

impl FormatterConfig {
    /// Configuration loaded from the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Trait for source code formatters.
#[async_trait]
pub trait Formatter: Send + Sync {
    /// Formatter identifier (e.g., "prettier")
    fn name(&self) -> &'static str;

    /// Find the configuration that applies at `path`.
    ///
    /// `Ok(None)` means no configuration exists and defaults apply. An error
    /// means resolution itself failed.
    async fn resolve_config(&self, path: &Path) -> Result<Option<FormatterConfig>>;

    /// Format `source` as if it lived at `filepath`.
    async fn format(
        &self,
        source: &str,
        filepath: &Path,
        config: Option<&FormatterConfig>,
    ) -> Result<String>;
}

/// A formatter paired with its once-resolved configuration.
#[derive(Clone)]
pub struct Formatting {
    formatter: Arc<dyn Formatter>,
    config: Option<Arc<FormatterConfig>>,
}

impl Formatting {
    pub fn new(formatter: Arc<dyn Formatter>, config: Option<FormatterConfig>) -> Self {
        Self {
            formatter,
            config: config.map(Arc::new),
        }
    }

    /// The resolved configuration, if any was found.
    pub fn config(&self) -> Option<&FormatterConfig> {
        self.config.as_deref()
    }

    /// Format one file's source text.
    pub async fn format(&self, source: &str, filepath: &Path) -> Result<String> {
        self.formatter
            .format(source, filepath, self.config.as_deref())
            .await
    }
}

impl std::fmt::Debug for Formatting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatting")
            .field("formatter", &self.formatter.name())
            .field("config", &self.config)
            .finish()
    }
}

/// Formats files by running the `prettier` executable.
#[derive(Debug, Clone)]
pub struct PrettierCli {
    program: OsString,
}

impl PrettierCli {
    /// Use `$NESTDTO_PRETTIER`, falling back to `prettier` on the PATH.
    pub fn new() -> Self {
        let program = std::env::var_os(PRETTIER_ENV).unwrap_or_else(|| OsString::from("prettier"));
        Self { program }
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.kill_on_drop(true);
        command
    }
}

impl Default for PrettierCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Formatter for PrettierCli {
    fn name(&self) -> &'static str {
        "prettier"
    }

    async fn resolve_config(&self, path: &Path) -> Result<Option<FormatterConfig>> {
        let metadata = tokio::fs::metadata(path)
            .await
            .wrap_err_with(|| format!("cannot access '{}'", path.display()))?;

        // Prettier config files are used as-is; any other file starts the search from its directory
        let dir = if metadata.is_file() {
            if is_prettier_config(path) {
                return Ok(Some(FormatterConfig::new(path)));
            }
            match path.parent().filter(|p| !p.as_os_str().is_empty()) {
                Some(parent) => parent,
                None => Path::new("."),
            }
        } else {
            path
        };

        // prettier searches upwards from a file and prints the result relative to its cwd
        let output = self
            .command()
            .current_dir(dir)
            .arg("--find-config-path")
            .arg("index.ts")
            .output()
            .await
            .wrap_err_with(|| format!("failed to run {}", self.program.to_string_lossy()))?;

        let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() || found.is_empty() {
            return Ok(None);
        }

        Ok(Some(FormatterConfig::new(dir.join(found))))
    }

    async fn format(
        &self,
        source: &str,
        filepath: &Path,
        config: Option<&FormatterConfig>,
    ) -> Result<String> {
        let mut command = self.command();
        command.arg("--stdin-filepath").arg(filepath);
        if let Some(config) = config {
            command.arg("--config").arg(config.path());
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .wrap_err_with(|| format!("failed to run {}", self.program.to_string_lossy()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| eyre!("prettier stdin was not captured"))?;
        stdin.write_all(source.as_bytes()).await?;
        drop(stdin);

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(eyre!(
                "prettier exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        String::from_utf8(output.stdout).wrap_err("prettier produced invalid UTF-8")
    }
}

/// Whether `path` names a prettier configuration file (`.prettierrc*` or `prettier.config.*`).
fn is_prettier_config(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(".prettierrc") || name.starts_with("prettier.config."))
}
