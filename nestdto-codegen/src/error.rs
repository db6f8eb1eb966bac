//! Errors surfaced by a generation run.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error from a collaborator (synthesizer or formatter).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Everything that can abort a generation run.
///
/// There is no recovery inside the pipeline: every variant is fatal to the
/// current run and reruns regenerate all files.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Invalid generation options, detected before any work starts.
    #[error(transparent)]
    Config(#[from] Box<nestdto_config::Error>),

    /// The DTO synthesizer failed.
    #[error("DTO synthesis failed")]
    Synthesis(#[source] BoxError),

    /// Formatter configuration could not be resolved.
    #[error("failed to resolve formatter configuration from '{path}'")]
    FormatterConfig {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Formatting one file failed.
    #[error("failed to format '{path}'")]
    Format {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Directory creation or file write failed.
    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A write task panicked or was cancelled.
    #[error("write task did not complete")]
    Task(#[from] tokio::task::JoinError),
}

impl GenerateError {
    /// Whether the error was raised before any file was produced.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::FormatterConfig { .. })
    }
}
