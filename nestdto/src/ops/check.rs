//! Check operation - option and schema validation.

use std::path::Path;

use nestdto_config::{ConfigFile, GenerationOptions, RawOptions, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Normalizes the options and loads the schema without synthesizing or
/// writing anything.
pub fn check(
    config: &ConfigFile,
    raw: &RawOptions,
    output: Option<&str>,
    schema: Option<&Path>,
) -> Result<CheckReport> {
    let options = GenerationOptions::normalize(raw, config.output_or(output)?)?;
    let schema = config.load_schema(schema)?;

    Ok(CheckReport {
        config_path: config.path().to_path_buf(),
        unknown_keys: raw.unknown_keys().into_iter().map(String::from).collect(),
        models: schema.models.len(),
        enums: schema.enums.len(),
        options,
    })
}
