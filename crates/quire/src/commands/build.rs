//! `quire build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use quire_config::{CliSettings, Config};
use quire_content::load_documents;
use quire_renderer::RenderConfig;
use quire_site::{BuildConfig, IndexConfig, SiteBuilder};
use quire_sink::{FsSink, PageSink};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for rendered pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Document source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Stylesheet path referenced from every page (overrides config).
    #[arg(long)]
    stylesheet: Option<String>,

    /// Skip the index page.
    #[arg(long)]
    no_index: bool,

    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            stylesheet: self.stylesheet,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source_dir = &config.content_resolved.source_dir;
        let output_dir = &config.output_resolved.dir;
        let index_page = config.site.index && !self.no_index;
        tracing::info!(
            config = ?config.config_path,
            source_dir = %source_dir.display(),
            output_dir = %output_dir.display(),
            stylesheet = %config.site.stylesheet,
            index_page,
            "Configuration loaded"
        );
        output.directories(source_dir, Some(output_dir));

        let documents = load_documents(source_dir)?;

        let sink: Arc<dyn PageSink> = Arc::new(FsSink::new(output_dir.clone()));
        let build_config = BuildConfig {
            render: RenderConfig {
                stylesheet: config.site.stylesheet.clone(),
                ..RenderConfig::default()
            },
            index: index_page.then(|| IndexConfig {
                title: config.site.title.clone(),
            }),
        };

        let report = SiteBuilder::new(sink, build_config).build(&documents)?;
        output.build_report(&report, output_dir);

        if !report.is_success() {
            return Err(CliError::Write {
                failed: report.failed().count(),
                total: report.len(),
            });
        }
        Ok(())
    }
}
