//! Ordered render stages over a pulldown-cmark event stream.

use pulldown_cmark::{Event, Options, Parser, html};

use crate::stages::{DiagramStage, FootnoteStage, MathStage};

/// Parser extensions enabled regardless of registered stages.
const BASE_OPTIONS: Options = Options::ENABLE_TABLES
    .union(Options::ENABLE_STRIKETHROUGH)
    .union(Options::ENABLE_TASKLISTS);

/// A named transform applied to a parsed article.
///
/// Stages run in registration order. Each receives the full event stream
/// produced by the previous stage.
pub trait RenderStage {
    /// Stable stage name, reported in the site configuration.
    fn name(&self) -> &'static str;

    /// Parser extensions this stage needs.
    fn options(&self) -> Options {
        Options::empty()
    }

    /// Rewrite the event stream.
    fn transform<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>>;
}

/// Which bundled stages to register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageSelection {
    /// Register [`DiagramStage`].
    pub diagrams: bool,
    /// Register [`MathStage`].
    pub math: bool,
    /// Register [`FootnoteStage`].
    pub footnotes: bool,
}

impl Default for StageSelection {
    fn default() -> Self {
        Self {
            diagrams: true,
            math: true,
            footnotes: true,
        }
    }
}

/// Markdown to HTML renderer built from explicitly registered stages.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn RenderStage>>,
}

impl Pipeline {
    /// Create a pipeline with no stages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the selected bundled stages in the order diagrams, math,
    /// footnotes.
    #[must_use]
    pub fn from_selection(selection: StageSelection) -> Self {
        let mut pipeline = Self::new();
        if selection.diagrams {
            pipeline = pipeline.with_stage(DiagramStage);
        }
        if selection.math {
            pipeline = pipeline.with_stage(MathStage);
        }
        if selection.footnotes {
            pipeline = pipeline.with_stage(FootnoteStage);
        }
        pipeline
    }

    /// Append a stage.
    #[must_use]
    pub fn with_stage<S: RenderStage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Names of registered stages, in order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    /// Parser options: base extensions plus everything the stages ask for.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        self.stages
            .iter()
            .fold(BASE_OPTIONS, |acc, stage| acc | stage.options())
    }

    /// Render markdown to HTML.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let mut events: Vec<Event<'_>> =
            Parser::new_ext(markdown, self.parser_options()).collect();

        for stage in &self.stages {
            events = stage.transform(events);
            tracing::trace!(stage = stage.name(), events = events.len(), "Applied render stage");
        }

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());
        out
    }
}
