//! Generate command report data structures.

use std::path::{Path, PathBuf};

use nestdto_codegen::GenerateReport;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Resolved output directory.
    pub output_dir: PathBuf,
    /// Warnings collected before generation (e.g. unknown option keys).
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(GenerateReport),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

impl Report for GenerateSummary {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(report) => self.render_written(out, report),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateSummary {
    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.output_dir).unwrap_or(path)
    }

    fn render_written(&self, out: &mut dyn Output, report: &GenerateReport) {
        out.section(&format!(
            "Generated {} files in {}",
            report.total(),
            self.output_dir.display()
        ));
        for path in &report.written {
            out.added_item(&self.relative(path).display().to_string());
        }
        out.newline();

        out.key_value("DTO files", &report.generated.to_string());
        if report.barrels > 0 {
            out.key_value("Barrels", &report.barrels.to_string());
        }

        let formatting = match (&report.formatter_config, report.formatted) {
            (Some(config), _) => format!("prettier ({})", config.display()),
            (None, true) => "prettier (default options)".to_string(),
            (None, false) => "disabled".to_string(),
        };
        out.key_value("Formatting", &formatting);
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&self.relative(&file.path).display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated in {}",
            preview.files.len(),
            self.output_dir.display()
        ));
    }
}
