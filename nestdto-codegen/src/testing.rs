//! Test doubles for the pipeline's collaborators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    path::Path,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use eyre::{Result, bail};
use nestdto_core::FileSpec;

use crate::{
    format::{Formatter, FormatterConfig},
    synthesis::{DtoSynthesizer, SynthesisRequest},
};

/// Synthesizer returning a fixed list of files rooted at the output directory.
#[derive(Debug, Default)]
pub struct StaticSynthesizer {
    files: Vec<(String, String)>,
    calls: AtomicUsize,
}

impl StaticSynthesizer {
    pub fn new<P: Into<String>, C: Into<String>>(files: impl IntoIterator<Item = (P, C)>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|(p, c)| (p.into(), c.into()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `synthesize` ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DtoSynthesizer for StaticSynthesizer {
    fn name(&self) -> &'static str {
        "static"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn synthesize(&self, request: SynthesisRequest<'_>) -> Result<Vec<FileSpec>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .files
            .iter()
            .map(|(path, content)| FileSpec::new(request.options.output.join(path), content.as_str()))
            .collect())
    }
}

/// Synthesizer that always fails.
#[derive(Debug, Default)]
pub struct FailingSynthesizer;

impl DtoSynthesizer for FailingSynthesizer {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn synthesize(&self, _request: SynthesisRequest<'_>) -> Result<Vec<FileSpec>> {
        bail!("synthesis exploded")
    }
}

/// Formatter that upper-cases content and counts its calls.
///
/// Resolution always finds `<path>/.prettierrc`.
#[derive(Debug, Default)]
pub struct UppercaseFormatter {
    resolutions: AtomicUsize,
    formatted: AtomicUsize,
    resolved_from: Mutex<Vec<std::path::PathBuf>>,
}

impl UppercaseFormatter {
    /// Number of `resolve_config` calls.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }

    /// Number of `format` calls.
    pub fn formatted(&self) -> usize {
        self.formatted.load(Ordering::SeqCst)
    }

    /// Paths passed to `resolve_config`, in call order.
    pub fn resolved_from(&self) -> Vec<std::path::PathBuf> {
        self.resolved_from
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Formatter for UppercaseFormatter {
    fn name(&self) -> &'static str {
        "uppercase"
    }

    async fn resolve_config(&self, path: &Path) -> Result<Option<FormatterConfig>> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut paths) = self.resolved_from.lock() {
            paths.push(path.to_path_buf());
        }
        Ok(Some(FormatterConfig::new(path.join(".prettierrc"))))
    }

    async fn format(
        &self,
        source: &str,
        _filepath: &Path,
        _config: Option<&FormatterConfig>,
    ) -> Result<String> {
        self.formatted.fetch_add(1, Ordering::SeqCst);
        Ok(source.to_uppercase())
    }
}

/// Formatter whose formatting always fails.
#[derive(Debug, Default)]
pub struct FailingFormatter;

#[async_trait]
impl Formatter for FailingFormatter {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn resolve_config(&self, _path: &Path) -> Result<Option<FormatterConfig>> {
        Ok(None)
    }

    async fn format(
        &self,
        _source: &str,
        filepath: &Path,
        _config: Option<&FormatterConfig>,
    ) -> Result<String> {
        bail!("cannot format {}", filepath.display())
    }
}

/// Formatter whose configuration can never be resolved.
#[derive(Debug, Default)]
pub struct UnresolvableFormatter;

#[async_trait]
impl Formatter for UnresolvableFormatter {
    fn name(&self) -> &'static str {
        "unresolvable"
    }

    async fn resolve_config(&self, path: &Path) -> Result<Option<FormatterConfig>> {
        bail!("no formatter installed to read {}", path.display())
    }

    async fn format(
        &self,
        source: &str,
        _filepath: &Path,
        _config: Option<&FormatterConfig>,
    ) -> Result<String> {
        Ok(source.to_string())
    }
}
