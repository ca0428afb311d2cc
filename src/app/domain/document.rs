use std::path::{Path, PathBuf};

/// Title used before any file has been opened.
pub const UNTITLED: &str = "New Document";

/// Shown when neither a display name nor a basename can be derived.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Opaque reference to a file chosen through a dialog.
///
/// Callers never read the path to decide anything themselves; they hand the
/// handle back to the `FileService`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last path component, lossily converted. `None` for roots and empty paths.
    pub fn basename(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
    }
}

/// Pick the label for a file: the service-provided display name first,
/// then the basename, then a placeholder. Some backends only answer one of
/// the two queries, so both are tried in that order.
pub fn resolve_display_name(display_name: Option<String>, handle: &FileHandle) -> String {
    display_name
        .filter(|s| !s.is_empty())
        .or_else(|| handle.basename())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Metadata for the single open document. The text itself lives in the
/// session's text surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub associated_file: Option<FileHandle>,
    pub display_name: String,
    pub language_id: Option<String>,
}

impl Document {
    pub fn new_untitled() -> Self {
        Self {
            associated_file: None,
            display_name: UNTITLED.to_string(),
            language_id: None,
        }
    }

    pub fn is_untitled(&self) -> bool {
        self.associated_file.is_none()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new_untitled()
    }
}
