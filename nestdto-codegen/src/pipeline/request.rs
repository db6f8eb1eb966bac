//! Generation request.

use nestdto_config::{GenerationOptions, RawOptions};
use nestdto_ir::Schema;
use tracing::{info, warn};

use super::Stage;
use crate::Result;

/// Everything a single generation run reads.
///
/// Immutable once built: the pipeline only ever borrows it.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    options: GenerationOptions,
    schema: Schema,
}

impl GenerateRequest {
    /// Create a request from already-normalized options.
    pub fn new(options: GenerationOptions, schema: Schema) -> Self {
        Self { options, schema }
    }

    /// Normalize raw options and pair them with the schema.
    ///
    /// Unknown option keys are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Config`](crate::GenerateError::Config) when
    /// normalization fails. Nothing has been synthesized or written yet.
    pub fn normalize(raw: &RawOptions, output: &str, schema: Schema) -> Result<Self> {
        for key in raw.unknown_keys() {
            warn!(stage = %Stage::Normalize, key, "ignoring unknown generator option");
        }

        let options = GenerationOptions::normalize(raw, output)?;
        info!(
            stage = %Stage::Normalize,
            output = %options.output.display(),
            style = %options.file_naming_style,
            "normalized generator options"
        );

        Ok(Self::new(options, schema))
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use nestdto_config::{Error, NamingStyle};

    use super::*;
    use crate::GenerateError;

    #[test]
    fn test_normalize_applies_defaults() {
        let request = GenerateRequest::normalize(&RawOptions::new(), "out", Schema::default()).unwrap();

        assert_eq!(request.options().file_naming_style, NamingStyle::Camel);
        assert!(request.options().use_prettier);
        assert!(request.schema().models.is_empty());
    }

    #[test]
    fn test_normalize_rejects_invalid_style() {
        let raw: RawOptions = [("fileNamingStyle", "upper")].into_iter().collect();
        let err = GenerateRequest::normalize(&raw, "out", Schema::default()).unwrap_err();

        assert!(err.is_config());
        assert!(matches!(err, GenerateError::Config(ref e) if matches!(**e, Error::InvalidNamingStyle { .. })));
    }

    #[test]
    fn test_unknown_keys_are_not_errors() {
        let raw: RawOptions = [("nonsense", "1")].into_iter().collect();
        assert!(GenerateRequest::normalize(&raw, "out", Schema::default()).is_ok());
    }
}
