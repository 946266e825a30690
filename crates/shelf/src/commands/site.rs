//! `shelf site` command implementation.

use clap::Args;
use shelf_config::Config;
use shelf_site::SiteConfig;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the site command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl SiteArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.source.load_config()?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        output.data(&self.site_json(&config)?)?;
        Ok(())
    }

    fn site_json(&self, config: &Config) -> Result<String, CliError> {
        let site = SiteConfig::load(config)?;
        self.source.to_json(&site)
    }
}
