//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod sidebar;
pub(crate) mod site;

pub(crate) use render::RenderArgs;
pub(crate) use sidebar::SidebarArgs;
pub(crate) use site::SiteArgs;

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use shelf_config::{CliSettings, Config};

use crate::error::CliError;

/// Options shared by commands that read the content root.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover shelf.toml).
    #[arg(short, long, env = "SHELF_CONFIG")]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

impl SourceArgs {
    /// Load configuration with the `--source-dir` override applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            ..CliSettings::default()
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Serialize `value` honoring `--pretty`.
    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, CliError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}
