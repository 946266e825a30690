//! CLI error types.

use std::path::PathBuf;

use shelf_config::ConfigError;
use shelf_sidebar::SidebarError;
use shelf_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
