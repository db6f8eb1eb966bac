use std::{path::PathBuf, sync::Arc};

use clap::Args;
use eyre::{Context, Result};
use nestdto_codegen::{GenerateError, Pipeline};
use nestdto_typescript::NestDtoSynthesizer;

use super::{ConfigArgs, UnwrapOrExit, exit_with_diagnostic};
use crate::{
    ops::{self, GenerateInput},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Schema file (overrides `schema` in nestdto.toml)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Output directory (overrides `output` in nestdto.toml)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self) -> Result<()> {
        let (file, raw) = self.config.load().unwrap_or_exit();
        let schema = file.load_schema(self.schema.as_deref()).unwrap_or_exit();
        let output = file.output_or(self.output.as_deref()).unwrap_or_exit().to_string();

        let pipeline = Pipeline::new(Arc::new(NestDtoSynthesizer::new()));
        let input = GenerateInput {
            raw,
            output,
            schema,
            dry_run: self.dry_run,
        };

        let summary = match ops::generate(&pipeline, input).await {
            Ok(summary) => summary,
            Err(GenerateError::Config(e)) => exit_with_diagnostic(*e),
            Err(e) => return Err(e).wrap_err("Failed to generate DTOs"),
        };

        summary.render(&mut TerminalOutput::new());
        Ok(())
    }
}
