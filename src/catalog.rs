//! Document discovery and selection.
//!
//! A catalog is the sorted list of markdown files in one directory. A
//! requested name is reduced to its basename, so lookups never leave the
//! directory; an unknown or non-`.md` name falls back to the first entry.

use log::{debug, warn};
use mdreader_core::{ReaderError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A markdown document selected from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name inside the catalog directory
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
}

impl Document {
    /// Read the document as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Size of the file in bytes.
    pub fn size(&self) -> Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }

    /// Last modification time of the file.
    pub fn modified(&self) -> Result<SystemTime> {
        Ok(fs::metadata(&self.path)?.modified()?)
    }
}

/// Sorted list of the markdown files in a directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
    names: Vec<String>,
}

impl Catalog {
    /// Scan `dir` for regular files ending in `.md` (any case).
    ///
    /// A missing directory gives an empty catalog.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut names = Vec::new();

        if dir.is_dir() {
            for entry in fs::read_dir(dir)? {
                let entry = entry?;
                if !entry.path().is_file() {
                    continue;
                }
                // Names that aren't valid UTF-8 can't be requested by name
                let Ok(name) = entry.file_name().into_string() else {
                    continue;
                };
                if is_markdown_name(&name) {
                    names.push(name);
                }
            }
            names.sort();
        } else {
            debug!("Document directory {} does not exist", dir.display());
        }

        debug!("Found {} document(s) in {}", names.len(), dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            names,
        })
    }

    /// Directory this catalog was scanned from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Document file names, sorted.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All documents in catalog order.
    pub fn documents(&self) -> impl Iterator<Item = Document> + '_ {
        self.names.iter().map(|name| self.document(name))
    }

    fn document(&self, name: &str) -> Document {
        Document {
            name: name.to_string(),
            path: self.dir.join(name),
        }
    }

    /// Pick the document to show.
    ///
    /// `requested` (or `default` when absent) is accepted when it ends in
    /// `.md` and its basename exists as a file in the directory. Otherwise
    /// the first catalog entry is used.
    pub fn resolve(&self, requested: Option<&str>, default: &str) -> Result<Document> {
        let requested = requested.unwrap_or(default);
        let base = Path::new(requested)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("");

        if !base.is_empty() && requested.ends_with(".md") && self.dir.join(base).is_file() {
            return Ok(self.document(base));
        }

        match self.names.first() {
            Some(first) => {
                warn!("Document {:?} not available, showing {}", requested, first);
                Ok(self.document(first))
            }
            None => Err(ReaderError::NoDocuments(self.dir.clone())),
        }
    }
}

fn is_markdown_name(name: &str) -> bool {
    let split = name.len().saturating_sub(3);
    split > 0 && name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(".md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn catalog_dir(files: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            fs::write(dir.path().join(name), format!("# {}", name)).unwrap();
        }
        dir
    }

    #[test]
    fn test_scan_sorts_and_filters() {
        let dir = catalog_dir(&["b.md", "a.md", "notes.txt", "C.MD"]);
        fs::create_dir(dir.path().join("sub.md")).unwrap();

        let catalog = Catalog::scan(dir.path()).unwrap();
        assert_eq!(catalog.names(), &["C.MD", "a.md", "b.md"]);
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::scan(&dir.path().join("missing")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_resolve_requested() {
        let dir = catalog_dir(&["a.md", "b.md"]);
        let catalog = Catalog::scan(dir.path()).unwrap();

        let doc = catalog.resolve(Some("b.md"), "a.md").unwrap();
        assert_eq!(doc.name, "b.md");
        assert_eq!(doc.path, dir.path().join("b.md"));
        assert_eq!(doc.read().unwrap(), "# b.md");
    }

    #[test]
    fn test_resolve_uses_default() {
        let dir = catalog_dir(&["a.md", "data_dictionary.md"]);
        let catalog = Catalog::scan(dir.path()).unwrap();

        let doc = catalog.resolve(None, "data_dictionary.md").unwrap();
        assert_eq!(doc.name, "data_dictionary.md");
    }

    #[test]
    fn test_resolve_strips_directories() {
        let dir = catalog_dir(&["a.md", "b.md"]);
        let catalog = Catalog::scan(dir.path()).unwrap();

        let doc = catalog.resolve(Some("../../elsewhere/b.md"), "x.md").unwrap();
        assert_eq!(doc.path, dir.path().join("b.md"));
    }

    #[test]
    fn test_resolve_falls_back_to_first() {
        let dir = catalog_dir(&["b.md", "a.md", "secret.txt"]);
        let catalog = Catalog::scan(dir.path()).unwrap();

        assert_eq!(catalog.resolve(Some("missing.md"), "x.md").unwrap().name, "a.md");
        assert_eq!(catalog.resolve(Some("secret.txt"), "x.md").unwrap().name, "a.md");
        assert_eq!(catalog.resolve(Some(".."), "x.md").unwrap().name, "a.md");
    }

    #[test]
    fn test_resolve_empty_catalog_errors() {
        let dir = catalog_dir(&[]);
        let catalog = Catalog::scan(dir.path()).unwrap();

        let err = catalog.resolve(None, "data_dictionary.md").unwrap_err();
        assert!(matches!(err, ReaderError::NoDocuments(_)));
    }

    #[test]
    fn test_document_size() {
        let dir = catalog_dir(&["guide.md"]);
        let catalog = Catalog::scan(dir.path()).unwrap();
        let doc = catalog.documents().next().unwrap();

        assert_eq!(doc.name, "guide.md");
        assert_eq!(doc.size().unwrap(), "# guide.md".len() as u64);
    }

    #[test]
    fn test_document_modified() {
        let dir = catalog_dir(&["guide.md"]);
        let catalog = Catalog::scan(dir.path()).unwrap();
        let doc = catalog.documents().next().unwrap();

        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        fs::File::options()
            .write(true)
            .open(&doc.path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        assert_eq!(doc.modified().unwrap(), mtime);
    }

    #[test]
    fn test_is_markdown_name() {
        assert!(is_markdown_name("a.md"));
        assert!(is_markdown_name("A.Md"));
        assert!(!is_markdown_name(".md"));
        assert!(!is_markdown_name("a.mdx"));
        assert!(!is_markdown_name("說明"));
    }
}
