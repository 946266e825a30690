//! Site configuration for Shelf.
//!
//! [`SiteConfig`] is built once at the start of a build from the loaded
//! [`Config`](shelf_config::Config) and handed to whatever consumes it. It
//! holds the site metadata, the sidebar, and the render stages to register.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use shelf_config::Config;
//! use shelf_site::SiteConfig;
//!
//! let config = Config::load(None, None)?;
//! let site = SiteConfig::load(&config)?;
//!
//! let html = site.pipeline().render("# Hello");
//! # Ok(())
//! # }
//! ```

mod site;

pub use site::{MarkdownSettings, SiteConfig, SiteError, ThemeConfig, stage_selection};

pub use shelf_sidebar::{Leaf, Section};
