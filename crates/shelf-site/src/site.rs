//! Site configuration value.

use std::time::Instant;

use serde::Serialize;
use shelf_config::{Config, MarkdownConfig};
use shelf_markdown::{Pipeline, StageSelection};
use shelf_sidebar::{Section, SidebarError, build_sidebar};

/// Error building the site configuration.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The content root could not be scanned.
    #[error(transparent)]
    Sidebar(#[from] SidebarError),
}

/// Stages enabled by the `[markdown]` config section.
#[must_use]
pub fn stage_selection(markdown: &MarkdownConfig) -> StageSelection {
    StageSelection {
        diagrams: markdown.diagrams,
        math: markdown.math,
        footnotes: markdown.footnotes,
    }
}

/// Theme options passed to the framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Sidebar sections in filesystem listing order.
    pub sidebar: Vec<Section>,
}

/// Registered markdown render stages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkdownSettings {
    /// Stage names in registration order.
    pub stages: Vec<&'static str>,
}

/// Configuration for one site build.
///
/// Serializes to the framework's config shape:
/// `{title, description, lang, themeConfig: {sidebar}, markdown: {stages}}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Document language.
    pub lang: String,
    /// Theme options, including the sidebar.
    pub theme_config: ThemeConfig,
    /// Markdown pipeline summary.
    pub markdown: MarkdownSettings,
    #[serde(skip)]
    selection: StageSelection,
}

impl SiteConfig {
    /// Build the site configuration, scanning the content root once.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Sidebar`] if the content root cannot be scanned.
    pub fn load(config: &Config) -> Result<Self, SiteError> {
        let start = Instant::now();
        let source_dir = &config.docs_resolved.source_dir;

        let sidebar = build_sidebar(source_dir)?;
        let selection = stage_selection(&config.markdown);
        let stages = Pipeline::from_selection(selection).stage_names().collect();

        tracing::info!(
            source_dir = %source_dir.display(),
            sections = sidebar.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Site configuration loaded"
        );

        Ok(Self {
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            lang: config.site.lang.clone(),
            theme_config: ThemeConfig { sidebar },
            markdown: MarkdownSettings { stages },
            selection,
        })
    }

    /// Sidebar sections.
    #[must_use]
    pub fn sidebar(&self) -> &[Section] {
        &self.theme_config.sidebar
    }

    /// Create a render pipeline with this site's stages.
    #[must_use]
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::from_selection(self.selection)
    }
}
