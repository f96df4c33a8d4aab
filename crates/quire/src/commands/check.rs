//! `quire check` command implementation.

use std::path::PathBuf;

use clap::Args;
use quire_config::{CliSettings, Config};
use quire_content::load_documents;
use quire_renderer::validate_with_index;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Document source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source_dir = &config.content_resolved.source_dir;
        output.directories(source_dir, None);

        let documents = load_documents(source_dir)?;
        validate_with_index(&documents, config.site.index)?;

        tracing::info!(
            documents = documents.len(),
            index_page = config.site.index,
            "Documents validated"
        );
        output.check_passed(documents.len(), config.site.index);
        Ok(())
    }
}
