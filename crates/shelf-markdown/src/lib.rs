//! Markdown render pipeline for Shelf articles.
//!
//! A [`Pipeline`] is an ordered list of [`RenderStage`]s. Each stage may turn
//! on parser extensions and rewrite the pulldown-cmark event stream; the
//! pipeline then writes the final stream as HTML.
//!
//! Bundled stages:
//! - [`DiagramStage`]: `mermaid` fences become `<pre class="mermaid">` blocks
//!   for the client-side renderer
//! - [`MathStage`]: `$...$` / `$$...$$` become delimited spans for the
//!   client-side typesetter
//! - [`FootnoteStage`]: footnotes, with definitions collected at the end
//!
//! # Example
//!
//! ```
//! use shelf_markdown::{MathStage, Pipeline};
//!
//! let pipeline = Pipeline::new().with_stage(MathStage);
//! let html = pipeline.render("Area is $\\pi r^2$.");
//! assert!(html.contains(r#"<span class="math math-inline">"#));
//! ```

mod escape;
mod pipeline;
mod stages;

pub use escape::escape_html;
pub use pipeline::{Pipeline, RenderStage, StageSelection};
pub use stages::{DiagramStage, FootnoteStage, MathStage};
