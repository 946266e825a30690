//! Sidebar navigation for a directory of articles.
//!
//! The content root holds one directory per topic. Each topic directory
//! becomes a [`Section`], and each `.md` file directly inside it becomes a
//! [`Leaf`] linking to `/articles/<section>/<file stem>`.
//!
//! ```text
//! articles/
//! ├── database/
//! │   ├── b_tree.md              -> /articles/database/b_tree
//! │   └── snapshot_isolation.md  -> /articles/database/snapshot_isolation
//! └── networking/
//!     └── tcp.md                 -> /articles/networking/tcp
//! ```
//!
//! Only one level is scanned: nested directories and non-markdown files are
//! skipped. Entries keep the order the filesystem lists them in.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), shelf_sidebar::SidebarError> {
//! let sidebar = shelf_sidebar::build_sidebar("articles")?;
//! for section in &sidebar {
//!     println!("{} ({} articles)", section.name, section.items.len());
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod section;

pub use builder::{CONTENT_EXTENSION, ROUTE_PREFIX, SidebarError, build_sidebar};
pub use section::{Leaf, Section};
