//! Pipeline orchestrator.

use std::{path::PathBuf, sync::Arc};

use nestdto_config::GenerationOptions;
use tracing::{debug, info};

use super::{GenerateReport, GenerateRequest, Plan, Stage};
use crate::{
    GenerateError, Result, aggregate,
    format::{Formatter, Formatting, PrettierCli},
    synthesis::{DtoSynthesizer, SynthesisRequest},
    writer,
};

/// The generation pipeline orchestrator.
///
/// Runs synthesize, aggregate, resolve-formatter and write in that order,
/// stopping at the first failure. The formatter defaults to [`PrettierCli`].
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(Arc::new(NestDtoSynthesizer::new()))
///     .working_dir(project_root);
///
/// let report = pipeline.run(request).await?;
/// println!("wrote {} files", report.total());
/// ```
pub struct Pipeline {
    synthesizer: Arc<dyn DtoSynthesizer>,
    formatter: Arc<dyn Formatter>,
    working_dir: Option<PathBuf>,
}

impl Pipeline {
    /// Create a pipeline around a synthesizer.
    pub fn new(synthesizer: Arc<dyn DtoSynthesizer>) -> Self {
        Self {
            synthesizer,
            formatter: Arc::new(PrettierCli::new()),
            working_dir: None,
        }
    }

    /// Replace the formatter.
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Directory to search for formatter configuration when none is
    /// configured explicitly. Defaults to the process working directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Synthesize and aggregate without touching the file system.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Synthesis`] when the synthesizer fails.
    pub fn plan(&self, request: &GenerateRequest) -> Result<Plan> {
        let options = request.options();

        let synthesized = self
            .synthesizer
            .synthesize(SynthesisRequest {
                options,
                schema: request.schema(),
            })
            .map_err(|e| GenerateError::Synthesis(e.into()))?;
        info!(
            stage = %Stage::Synthesize,
            synthesizer = self.synthesizer.name(),
            files = synthesized.len(),
            "synthesized DTO files"
        );

        let barrels = if options.re_export {
            let barrels = aggregate::collect_barrels(&synthesized, self.synthesizer.file_extension());
            info!(stage = %Stage::Aggregate, barrels = barrels.len(), "collected re-export barrels");
            barrels
        } else {
            Vec::new()
        };

        Ok(Plan {
            synthesized,
            barrels,
        })
    }

    /// Resolve formatter configuration once for the whole run.
    ///
    /// Returns `None` when formatting is disabled, in which case the
    /// formatter is never consulted.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::FormatterConfig`] when resolution fails.
    pub async fn resolve_formatting(&self, options: &GenerationOptions) -> Result<Option<Formatting>> {
        if !options.use_prettier {
            debug!(stage = %Stage::ResolveFormatter, "formatting disabled");
            return Ok(None);
        }

        let search_from = match &options.prettier_config {
            Some(path) => path.clone(),
            None => self.search_dir()?,
        };

        let config = self
            .formatter
            .resolve_config(&search_from)
            .await
            .map_err(|e| GenerateError::FormatterConfig {
                path: search_from.clone(),
                source: e.into(),
            })?;
        info!(
            stage = %Stage::ResolveFormatter,
            formatter = self.formatter.name(),
            config = ?config.as_ref().map(|c| c.path()),
            "resolved formatter configuration"
        );

        Ok(Some(Formatting::new(Arc::clone(&self.formatter), config)))
    }

    /// Run the full pipeline.
    ///
    /// Files are overwritten unconditionally, so running twice with the same
    /// request leaves identical contents. A failure while writing leaves any
    /// files already written in place.
    ///
    /// # Errors
    ///
    /// Returns the first error from any stage. Synthesis and formatter
    /// resolution failures happen before any file is written.
    pub async fn run(&self, request: GenerateRequest) -> Result<GenerateReport> {
        let plan = self.plan(&request)?;
        let formatting = self.resolve_formatting(request.options()).await?;

        let generated = plan.synthesized.len();
        let barrels = plan.barrels.len();
        let formatted = formatting.is_some();
        let formatter_config = formatting
            .as_ref()
            .and_then(Formatting::config)
            .map(|c| c.path().to_path_buf());

        info!(stage = %Stage::Write, files = plan.len(), formatted, "writing files");
        let mut written = writer::write_all(plan.into_files(), formatting).await?;
        written.sort();

        Ok(GenerateReport {
            written,
            generated,
            barrels,
            formatted,
            formatter_config,
        })
    }

    fn search_dir(&self) -> Result<PathBuf> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| GenerateError::FormatterConfig {
                path: PathBuf::from("."),
                source: e.into(),
            }),
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("synthesizer", &self.synthesizer.name())
            .field("formatter", &self.formatter.name())
            .field("working_dir", &self.working_dir)
            .finish()
    }
}
