//! DTO synthesis seam.
//!
//! The synthesizer turns the whole schema into file specifications in one
//! synchronous call. It must not touch the file system; everything it returns
//! is handed to the aggregator and writer.

use eyre::Result;
use nestdto_config::GenerationOptions;
use nestdto_core::FileSpec;
use nestdto_ir::Schema;

/// Inputs for a synthesis call.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisRequest<'a> {
    pub options: &'a GenerationOptions,
    pub schema: &'a Schema,
}

/// Trait for DTO synthesizers.
///
/// Implement this trait to produce DTO modules for another target framework.
pub trait DtoSynthesizer: Send + Sync {
    /// Synthesizer identifier (e.g., "nestjs")
    fn name(&self) -> &'static str;

    /// Extension of generated source files, without the dot (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Produce file specifications for every DTO in the schema.
    ///
    /// Paths are rooted at `request.options.output`. The order of the returned
    /// files determines the line order of re-export barrels.
    fn synthesize(&self, request: SynthesisRequest<'_>) -> Result<Vec<FileSpec>>;
}
