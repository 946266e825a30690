//! `shelf render` command implementation.

use std::path::PathBuf;

use clap::Args;
use shelf_config::{CliSettings, Config};
use shelf_markdown::Pipeline;
use shelf_site::stage_selection;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Path to configuration file (default: auto-discover shelf.toml).
    #[arg(short, long, env = "SHELF_CONFIG")]
    config: Option<PathBuf>,

    /// Disable the mermaid diagram stage.
    #[arg(long)]
    no_diagrams: bool,

    /// Disable the math stage.
    #[arg(long)]
    no_math: bool,

    /// Disable the footnote stage.
    #[arg(long)]
    no_footnotes: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        output.data(&self.render_html()?)?;
        Ok(())
    }

    fn render_html(&self) -> Result<String, CliError> {
        let cli_settings = CliSettings {
            diagrams: self.no_diagrams.then_some(false),
            math: self.no_math.then_some(false),
            footnotes: self.no_footnotes.then_some(false),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let markdown = std::fs::read_to_string(&self.file).map_err(|source| CliError::Read {
            path: self.file.clone(),
            source,
        })?;

        let pipeline = Pipeline::from_selection(stage_selection(&config.markdown));
        tracing::info!(
            file = %self.file.display(),
            stages = ?pipeline.stage_names().collect::<Vec<_>>(),
            "Rendering article"
        );

        Ok(pipeline.render(&markdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ARTICLE: &str = "Energy: $E = mc^2$\n\n```mermaid\ngraph TD\n  A --> B\n```\n";

    fn render_args(dir: &std::path::Path, no_math: bool) -> RenderArgs {
        let config = dir.join("shelf.toml");
        fs::write(&config, "[site]\ntitle = \"Notes\"\n").unwrap();
        let file = dir.join("post.md");
        fs::write(&file, ARTICLE).unwrap();

        RenderArgs {
            file,
            config: Some(config),
            no_diagrams: false,
            no_math,
            no_footnotes: false,
        }
    }

    #[test]
    fn test_renders_article_with_all_stages() {
        let dir = tempfile::tempdir().unwrap();

        let html = render_args(dir.path(), false).render_html().unwrap();

        assert!(html.contains(r#"<span class="math math-inline">\(E = mc^2\)</span>"#));
        assert!(html.contains("<pre class=\"mermaid\">graph TD\n  A --&gt; B\n</pre>"));
    }

    #[test]
    fn test_no_math_flag_disables_math_stage() {
        let dir = tempfile::tempdir().unwrap();

        let html = render_args(dir.path(), true).render_html().unwrap();

        assert!(html.contains("$E = mc^2$"));
        assert!(!html.contains("math-inline"));
        assert!(html.contains("<pre class=\"mermaid\">"));
    }

    #[test]
    fn test_missing_article_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = render_args(dir.path(), false);
        args.file = dir.path().join("absent.md");

        let err = args.render_html().unwrap_err();

        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("absent.md"));
    }
}
