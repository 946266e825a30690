//! Content root scanning.
//!
//! [`build_sidebar`] lists the content root once and each topic directory
//! once. Nothing is sorted: sections and leaves come out in `read_dir` order.

use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use crate::section::{Leaf, Section};

/// Route segment prepended to every leaf link.
pub const ROUTE_PREFIX: &str = "/articles";

/// Filename suffix that marks an article.
pub const CONTENT_EXTENSION: &str = ".md";

/// Sidebar construction error.
///
/// Any failure aborts the whole build; there is no partial sidebar.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Listing a directory or inspecting one of its entries failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Directory or entry that could not be read.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

impl SidebarError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Build the sidebar for a content root.
///
/// Every immediate subdirectory of `root` becomes a [`Section`]. Every entry
/// directly inside a section directory whose name ends with
/// [`CONTENT_EXTENSION`] becomes a [`Leaf`] linking to
/// `{ROUTE_PREFIX}/{section}/{label}`. Files at the root level, nested
/// directories and other files are skipped.
///
/// Symlinks are not followed when deciding whether an entry is a directory.
///
/// # Errors
///
/// Returns [`SidebarError::Io`] if `root` or any section directory cannot be
/// listed, including when `root` does not exist or is not a directory.
pub fn build_sidebar(root: impl AsRef<Path>) -> Result<Vec<Section>, SidebarError> {
    let root = root.as_ref();
    let mut sections = Vec::new();

    for entry in list_dir(root)? {
        if !is_dir(&entry)? {
            continue;
        }

        let mut section = Section::new(entry.file_name().to_string_lossy());
        section.items = scan_section(&entry.path(), &section.name)?;
        tracing::debug!(
            section = %section.name,
            articles = section.items.len(),
            "Discovered sidebar section"
        );
        sections.push(section);
    }

    Ok(sections)
}

/// Collect leaves from a single section directory.
fn scan_section(dir: &Path, section_name: &str) -> Result<Vec<Leaf>, SidebarError> {
    let mut items = Vec::new();

    for entry in list_dir(dir)? {
        if is_dir(&entry)? {
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if let Some(label) = file_name.strip_suffix(CONTENT_EXTENSION) {
            items.push(Leaf {
                label: label.to_owned(),
                path: format!("{ROUTE_PREFIX}/{section_name}/{label}"),
            });
        }
    }

    Ok(items)
}

/// Read all entries of a directory, failing on the first unreadable one.
///
/// The directory handle is closed before returning.
fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, SidebarError> {
    fs::read_dir(dir)
        .map_err(|e| SidebarError::io(dir, e))?
        .map(|entry| entry.map_err(|e| SidebarError::io(dir, e)))
        .collect()
}

fn is_dir(entry: &DirEntry) -> Result<bool, SidebarError> {
    entry
        .file_type()
        .map(|t| t.is_dir())
        .map_err(|e| SidebarError::io(&entry.path(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn touch(path: &Path) {
        fs::write(path, "# Title\n").unwrap();
    }

    fn leaf(label: &str, path: &str) -> Leaf {
        Leaf {
            label: label.to_owned(),
            path: path.to_owned(),
        }
    }

    #[test]
    fn test_empty_root_returns_no_sections() {
        let temp_dir = create_test_dir();

        let sidebar = build_sidebar(temp_dir.path()).unwrap();

        assert!(sidebar.is_empty());
    }

    #[test]
    fn test_root_level_files_are_not_sections() {
        let temp_dir = create_test_dir();
        touch(&temp_dir.path().join("index.md"));
        touch(&temp_dir.path().join("README.txt"));

        let sidebar = build_sidebar(temp_dir.path()).unwrap();

        assert!(sidebar.is_empty());
    }

    #[test]
    fn test_section_without_articles_is_kept() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("drafts")).unwrap();

        let sidebar = build_sidebar(temp_dir.path()).unwrap();

        assert_eq!(sidebar, vec![Section::new("drafts")]);
    }

    #[test]
    fn test_builds_leaves_with_prefixed_links() {
        let temp_dir = create_test_dir();
        let database = temp_dir.path().join("database");
        fs::create_dir(&database).unwrap();
        touch(&database.join("snapshot_isolation.md"));
        touch(&database.join("b_tree.md"));

        let sidebar = build_sidebar(temp_dir.path()).unwrap();

        assert_eq!(sidebar.len(), 1);
        let section = &sidebar[0];
        assert_eq!(section.name, "database");

        // Listing order is platform-defined, compare sorted
        let mut items = section.items.clone();
        items.sort_by(|a, b| a.label.cmp(&b.label));
        assert_eq!(
            items,
            vec![
                leaf("b_tree", "/articles/database/b_tree"),
                leaf("snapshot_isolation", "/articles/database/snapshot_isolation"),
            ]
        );
    }

    #[test]
    fn test_skips_non_markdown_files() {
        let temp_dir = create_test_dir();
        let section = temp_dir.path().join("networking");
        fs::create_dir(&section).unwrap();
        touch(&section.join("tcp.md"));
        touch(&section.join("notes.txt"));
        touch(&section.join("diagram.md.bak"));

        let sidebar = build_sidebar(temp_dir.path()).unwrap();

        assert_eq!(
            sidebar[0].items,
            vec![leaf("tcp", "/articles/networking/tcp")]
        );
    }

    #[test]
    fn test_nested_directories_are_ignored() {
        let temp_dir = create_test_dir();
        let section = temp_dir.path().join("database");
        let nested = section.join("internals");
        fs::create_dir_all(&nested).unwrap();
        touch(&section.join("wal.md"));
        touch(&nested.join("pages.md"));
        // A directory named like an article is still a directory
        fs::create_dir(section.join("archive.md")).unwrap();

        let sidebar = build_sidebar(temp_dir.path()).unwrap();

        assert_eq!(sidebar.len(), 1);
        assert_eq!(
            sidebar[0].items,
            vec![leaf("wal", "/articles/database/wal")]
        );
    }

    #[test]
    fn test_multiple_sections() {
        let temp_dir = create_test_dir();
        for (dir, file) in [("database", "mvcc.md"), ("os", "scheduler.md")] {
            let path = temp_dir.path().join(dir);
            fs::create_dir(&path).unwrap();
            touch(&path.join(file));
        }

        let mut sidebar = build_sidebar(temp_dir.path()).unwrap();
        sidebar.sort_by(|a, b| a.name.cmp(&b.name));

        let names: Vec<_> = sidebar.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["database", "os"]);
        assert_eq!(sidebar[0].items[0].path, "/articles/database/mvcc");
        assert_eq!(sidebar[1].items[0].path, "/articles/os/scheduler");
    }

    #[test]
    fn test_special_characters_are_not_escaped() {
        let temp_dir = create_test_dir();
        let section = temp_dir.path().join("c++ notes");
        fs::create_dir(&section).unwrap();
        touch(&section.join("move semantics.md"));

        let sidebar = build_sidebar(temp_dir.path()).unwrap();

        assert_eq!(sidebar[0].name, "c++ notes");
        assert_eq!(
            sidebar[0].items[0].path,
            "/articles/c++ notes/move semantics"
        );
    }

    #[test]
    fn test_repeated_builds_are_equal() {
        let temp_dir = create_test_dir();
        let section = temp_dir.path().join("database");
        fs::create_dir(&section).unwrap();
        touch(&section.join("a.md"));
        touch(&section.join("b.md"));
        touch(&section.join("c.md"));

        let first = build_sidebar(temp_dir.path()).unwrap();
        let second = build_sidebar(temp_dir.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = create_test_dir();
        let missing = temp_dir.path().join("nope");

        let err = build_sidebar(&missing).unwrap_err();

        let SidebarError::Io { path, source } = &err;
        assert_eq!(path, &missing);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_root_that_is_a_file_is_an_error() {
        let temp_dir = create_test_dir();
        let file = temp_dir.path().join("articles.md");
        touch(&file);

        assert!(build_sidebar(&file).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_section_aborts_build() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = create_test_dir();
        let readable = temp_dir.path().join("database");
        fs::create_dir(&readable).unwrap();
        touch(&readable.join("mvcc.md"));
        let locked = temp_dir.path().join("private");
        fs::create_dir(&locked).unwrap();
        touch(&locked.join("secret.md"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        let listable = fs::read_dir(&locked).is_ok();
        let result = build_sidebar(temp_dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if listable {
            return;
        }

        let SidebarError::Io { path, source } = result.unwrap_err();
        assert_eq!(path, locked);
        assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
    }
}
