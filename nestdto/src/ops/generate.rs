//! Generate operation - DTO generation.

use nestdto_codegen::{GenerateRequest, Pipeline, Result};
use nestdto_config::RawOptions;
use nestdto_ir::Schema;

use crate::reports::{GenerateSummary, GenerationResult, PreviewFile, PreviewResult};

/// Input for the generate operation.
#[derive(Debug)]
pub struct GenerateInput {
    /// Raw generator options, overrides already applied.
    pub raw: RawOptions,
    /// Output location as written by the user.
    pub output: String,
    pub schema: Schema,
    /// Plan only; nothing is written.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Normalizes the options once, then either writes every file through the
/// pipeline or returns the planned files for preview.
pub async fn generate(pipeline: &Pipeline, input: GenerateInput) -> Result<GenerateSummary> {
    let warnings = input
        .raw
        .unknown_keys()
        .into_iter()
        .map(|key| format!("unknown generator option '{}' is ignored", key))
        .collect();

    let request = GenerateRequest::normalize(&input.raw, &input.output, input.schema)?;
    let output_dir = request.options().output.clone();

    let result = if input.dry_run {
        let files = pipeline
            .plan(&request)?
            .into_files()
            .into_iter()
            .map(|spec| {
                let (path, content) = spec.into_parts();
                PreviewFile { path, content }
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        GenerationResult::Written(pipeline.run(request).await?)
    };

    Ok(GenerateSummary {
        output_dir,
        warnings,
        result,
    })
}
