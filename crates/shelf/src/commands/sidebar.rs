//! `shelf sidebar` command implementation.

use clap::Args;
use shelf_sidebar::build_sidebar;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl SidebarArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        output.data(&self.sidebar_json()?)?;
        Ok(())
    }

    fn sidebar_json(&self) -> Result<String, CliError> {
        let config = self.source.load_config()?;
        let source_dir = &config.docs_resolved.source_dir;

        tracing::info!(source_dir = %source_dir.display(), "Building sidebar");
        let sidebar = build_sidebar(source_dir)?;

        self.source.to_json(&sidebar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;

    fn sidebar_args(config: PathBuf) -> SidebarArgs {
        SidebarArgs {
            source: SourceArgs {
                config: Some(config),
                source_dir: None,
                pretty: false,
            },
        }
    }

    #[test]
    fn test_prints_sidebar_json() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("shelf.toml");
        fs::write(&config_path, "[docs]\nsource_dir = \"posts\"\n").unwrap();
        let section = dir.path().join("posts/database");
        fs::create_dir_all(&section).unwrap();
        fs::write(section.join("snapshot_isolation.md"), "# Snapshots\n").unwrap();

        let output = sidebar_args(config_path).sidebar_json().unwrap();

        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&output).unwrap(),
            json!([{
                "text": "database",
                "items": [{
                    "text": "snapshot_isolation",
                    "link": "/articles/database/snapshot_isolation"
                }],
                "collapsible": true,
                "collapsed": false
            }])
        );
    }

    #[test]
    fn test_missing_content_root_is_a_sidebar_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("shelf.toml");
        fs::write(&config_path, "[docs]\nsource_dir = \"missing\"\n").unwrap();

        let err = sidebar_args(config_path).sidebar_json().unwrap_err();

        assert!(matches!(err, CliError::Sidebar(_)));
    }
}
