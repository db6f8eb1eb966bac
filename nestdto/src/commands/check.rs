use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ConfigArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Schema file (overrides `schema` in nestdto.toml)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Output directory (overrides `output` in nestdto.toml)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (file, raw) = self.config.load().unwrap_or_exit();
        let report = ops::check(&file, &raw, self.output.as_deref(), self.schema.as_deref())
            .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
