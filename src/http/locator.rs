//! Maps request paths onto files below the document root.
//!
//! The locator never serves anything whose canonical path falls outside the
//! canonical root: `..` segments, symlinks pointing elsewhere and doubled
//! slashes all resolve before the prefix check.

use std::ffi::OsString;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use bytes::Bytes;

/// File served for slash-terminated paths.
pub const DEFAULT_INDEX: &str = "index.html";

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceResult {
    /// File content and its extension (`html`, `css`, or empty when the name has none)
    Ok { content: Bytes, content_type: String },
    /// Path names a directory; the client should retry with this path
    Redirect(String),
    NotFound,
}

/// Resolves paths against one document root.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    root: PathBuf,
    index_file: String,
}

impl ResourceLocator {
    pub fn new(root: impl Into<PathBuf>, index_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
        }
    }

    /// Resolves `path` (as taken from the request line) to a resource.
    pub fn find(&self, path: &str) -> ResourceResult {
        let mut path = path.to_string();
        if path.ends_with('/') {
            path.push_str(&self.index_file);
        }

        // Plain concatenation: an absolute request path cannot replace the root
        let mut candidate = OsString::from(self.root.as_os_str());
        candidate.push(&path);
        let candidate = PathBuf::from(candidate);

        let root = match self.root.canonicalize() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(root = %self.root.display(), error = %e, "Document root is not accessible");
                return ResourceResult::NotFound;
            }
        };

        let resolved = match candidate.canonicalize() {
            Ok(p) => p,
            Err(e) => {
                if !is_miss(&e) {
                    tracing::warn!(path = %path, error = %e, "Failed to resolve path");
                }
                return ResourceResult::NotFound;
            }
        };

        if !resolved.starts_with(&root) {
            tracing::warn!(
                path = %path,
                resolved = %resolved.display(),
                "Path traversal attempt blocked"
            );
            return ResourceResult::NotFound;
        }

        if resolved.is_dir() {
            path.push('/');
            return ResourceResult::Redirect(path);
        }

        match std::fs::read(&resolved) {
            Ok(content) => ResourceResult::Ok {
                content: Bytes::from(content),
                // Named after the requested file, not a symlink target
                content_type: extension_of(&candidate).to_string(),
            },
            Err(e) => {
                if !is_miss(&e) {
                    tracing::warn!(path = %path, error = %e, "Failed to read file");
                }
                ResourceResult::NotFound
            }
        }
    }
}

/// Resolves `path` below `root` using [`DEFAULT_INDEX`].
pub fn find(path: &str, root: impl AsRef<Path>) -> ResourceResult {
    ResourceLocator::new(root.as_ref(), DEFAULT_INDEX).find(path)
}

/// Errors that just mean "nothing servable here".
fn is_miss(e: &io::Error) -> bool {
    matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

/// Text after the last `.` of the file name, or `""` if there is none.
fn extension_of(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .unwrap_or("")
}
