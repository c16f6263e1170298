//! `build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_config::{CliSettings, Config};
use mdsite_site::{SitePaths, build_site};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `build` command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to config file (default: discover mdsite.toml upward)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content source directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Page template file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Static assets directory
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            content_dir: self.content,
            template: self.template,
            static_dir: self.static_dir,
            output_dir: self.output,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let site = config.site_resolved;
        let paths = SitePaths {
            content_dir: site.content_dir,
            template: site.template,
            static_dir: site.static_dir,
            output_dir: site.output_dir,
        };

        let summary = build_site(&paths)?;
        output.success(&format!(
            "Generated {} pages and copied {} static files to {}",
            summary.pages,
            summary.assets,
            paths.output_dir.display()
        ));
        Ok(())
    }
}
