//! Bundled render stages.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Tag, TagEnd};

use crate::escape::escape_html;
use crate::pipeline::RenderStage;

/// Fence language handed to the client-side diagram renderer.
const DIAGRAM_LANGUAGE: &str = "mermaid";

/// Marks up `mermaid` code fences for client-side rendering.
///
/// The fence is replaced with `<pre class="mermaid">` holding the escaped
/// source. Other code blocks pass through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiagramStage;

impl RenderStage for DiagramStage {
    fn name(&self) -> &'static str {
        "diagrams"
    }

    fn transform<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());
        let mut diagram: Option<String> = None;

        for event in events {
            if let Some(source) = diagram.as_mut() {
                match event {
                    Event::Text(text) => source.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        let source = diagram.take().unwrap_or_default();
                        out.push(Event::Html(CowStr::from(format!(
                            "<pre class=\"{DIAGRAM_LANGUAGE}\">{}</pre>\n",
                            escape_html(&source)
                        ))));
                    }
                    // Code blocks only carry text
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                    if is_diagram_fence(&info) =>
                {
                    diagram = Some(String::new());
                }
                event => out.push(event),
            }
        }

        out
    }
}

fn is_diagram_fence(info: &str) -> bool {
    info.split_whitespace().next() == Some(DIAGRAM_LANGUAGE)
}

/// Wraps inline and display math in delimited spans for the client-side
/// typesetter.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathStage;

impl RenderStage for MathStage {
    fn name(&self) -> &'static str {
        "math"
    }

    fn options(&self) -> Options {
        Options::ENABLE_MATH
    }

    fn transform<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        events
            .into_iter()
            .map(|event| match event {
                Event::InlineMath(tex) => Event::InlineHtml(CowStr::from(format!(
                    r#"<span class="math math-inline">\({}\)</span>"#,
                    escape_html(&tex)
                ))),
                Event::DisplayMath(tex) => Event::InlineHtml(CowStr::from(format!(
                    r#"<span class="math math-display">\[{}\]</span>"#,
                    escape_html(&tex)
                ))),
                other => other,
            })
            .collect()
    }
}

/// Enables footnotes and moves every definition to a trailing
/// `<section class="footnotes">`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FootnoteStage;

impl RenderStage for FootnoteStage {
    fn name(&self) -> &'static str {
        "footnotes"
    }

    fn options(&self) -> Options {
        Options::ENABLE_FOOTNOTES
    }

    fn transform<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut body = Vec::with_capacity(events.len());
        let mut definitions = Vec::new();
        let mut depth = 0usize;

        for event in events {
            let in_definition = match &event {
                Event::Start(Tag::FootnoteDefinition(_)) => {
                    depth += 1;
                    true
                }
                Event::End(TagEnd::FootnoteDefinition) => {
                    depth = depth.saturating_sub(1);
                    true
                }
                _ => depth > 0,
            };
            if in_definition {
                definitions.push(event);
            } else {
                body.push(event);
            }
        }

        if !definitions.is_empty() {
            body.push(Event::Html(CowStr::Borrowed("<section class=\"footnotes\">\n")));
            body.extend(definitions);
            body.push(Event::Html(CowStr::Borrowed("</section>\n")));
        }

        body
    }
}
