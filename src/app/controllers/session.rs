use std::fmt;

use tracing::{debug, info, warn};

use super::toast::Notify;
use crate::app::domain::FileHandle;
use crate::app::domain::document::{Document, resolve_display_name};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::files::{FileRequest, FileService, OperationId, ReadCompletion, WriteCompletion};
use crate::app::services::language::LanguageGuesser;
use crate::app::services::position::cursor_label;

/// The editable text behind a document. Offsets are in characters.
pub trait TextSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn cursor(&self) -> usize;
    fn place_cursor(&mut self, char_offset: usize);

    /// Everything up to the cursor. Enough to locate it, and cheaper than
    /// `text()` for surfaces that can copy a prefix.
    fn text_before_cursor(&self) -> String {
        self.text().chars().take(self.cursor()).collect()
    }
}

/// How a finished file operation is reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Opened(String),
    OpenFailed(String),
    InvalidEncoding(String),
    SavedAs(String),
    SaveFailed(String),
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened(name) => write!(f, "Opened “{}”", name),
            Self::OpenFailed(name) => write!(f, "Unable to open “{}”", name),
            Self::InvalidEncoding(name) => write!(f, "Invalid text encoding for “{}”", name),
            Self::SavedAs(name) => write!(f, "Saved as “{}”", name),
            Self::SaveFailed(name) => write!(f, "Unable to save as “{}”", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveRequest {
    Started(OperationId),
    /// Nothing to write; no request was made and nothing is reported.
    SkippedEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperationKind {
    Open,
    SaveAs,
}

struct Pending {
    id: OperationId,
    kind: OperationKind,
}

/// Owns the document and drives open/save round trips through a
/// `FileService`, reporting every result through a `Notify`.
///
/// Only one file operation may be in flight; a second request is rejected
/// with `AppError::OperationPending` before anything is dispatched.
pub struct DocumentSession<S: TextSurface, F: FileService> {
    surface: S,
    files: F,
    languages: Box<dyn LanguageGuesser>,
    document: Document,
    pending: Option<Pending>,
    next_operation: u64,
}

impl<S: TextSurface, F: FileService> DocumentSession<S, F> {
    pub fn new(surface: S, files: F, languages: Box<dyn LanguageGuesser>) -> Self {
        Self {
            surface,
            files,
            languages,
            document: Document::new_untitled(),
            pending: None,
            next_operation: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// `"Ln {line}, Col {column}"` for the current cursor.
    pub fn cursor_label(&self) -> String {
        let before = self.surface.text_before_cursor();
        cursor_label(&before, before.chars().count())
    }

    pub fn open_file(&mut self, handle: FileHandle) -> Result<OperationId> {
        let id = self.begin(OperationKind::Open)?;
        info!(path = %handle.path().display(), "opening file");
        self.files.read_all(FileRequest { id, handle });
        Ok(id)
    }

    pub fn save_file_as(&mut self, handle: FileHandle) -> Result<SaveRequest> {
        let text = self.surface.text();
        if text.is_empty() {
            debug!("save as skipped, buffer is empty");
            return Ok(SaveRequest::SkippedEmpty);
        }

        let id = self.begin(OperationKind::SaveAs)?;
        info!(path = %handle.path().display(), bytes = text.len(), "saving file");
        self.files.replace_all(FileRequest { id, handle }, text.into_bytes());
        Ok(SaveRequest::Started(id))
    }

    /// Apply a finished read. Returns `None` for completions that do not
    /// belong to the pending open.
    pub fn finish_open(&mut self, completion: ReadCompletion, notify: &mut dyn Notify) -> Option<FileOutcome> {
        if !self.take_pending(completion.id, OperationKind::Open) {
            return None;
        }
        let name = self.display_name(&completion.handle);

        let outcome = match completion.result {
            Err(e) => {
                warn!(file = %name, error = %e, "read failed");
                FileOutcome::OpenFailed(name)
            }
            Ok(bytes) => match String::from_utf8(bytes) {
                Err(e) => {
                    warn!(file = %name, error = %e, "file is not valid UTF-8");
                    FileOutcome::InvalidEncoding(name)
                }
                Ok(text) => {
                    self.surface.set_text(&text);
                    self.surface.place_cursor(0);

                    let file_name = completion.handle.basename().unwrap_or_else(|| name.clone());
                    let language_id = self.languages.guess(&file_name);
                    debug!(file = %name, language = ?language_id, "language detected");

                    self.document = Document {
                        associated_file: Some(completion.handle),
                        display_name: name.clone(),
                        language_id,
                    };
                    FileOutcome::Opened(name)
                }
            },
        };

        notify.notify(&outcome.to_string());
        Some(outcome)
    }

    /// Report a finished write. Returns `None` for completions that do not
    /// belong to the pending save.
    pub fn finish_save(&mut self, completion: WriteCompletion, notify: &mut dyn Notify) -> Option<FileOutcome> {
        if !self.take_pending(completion.id, OperationKind::SaveAs) {
            return None;
        }
        let name = self.display_name(&completion.handle);

        let outcome = match completion.result {
            Ok(()) => {
                info!(file = %name, "saved");
                FileOutcome::SavedAs(name)
            }
            Err(e) => {
                warn!(file = %name, error = %e, "write failed");
                FileOutcome::SaveFailed(name)
            }
        };

        notify.notify(&outcome.to_string());
        Some(outcome)
    }

    fn begin(&mut self, kind: OperationKind) -> Result<OperationId> {
        if let Some(pending) = &self.pending {
            warn!(?kind, in_flight = ?pending.kind, "rejecting file operation");
            return Err(AppError::OperationPending);
        }
        self.next_operation += 1;
        let id = OperationId(self.next_operation);
        self.pending = Some(Pending { id, kind });
        Ok(id)
    }

    fn take_pending(&mut self, id: OperationId, kind: OperationKind) -> bool {
        let matches = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.id == id && pending.kind == kind);
        if matches {
            self.pending = None;
        } else {
            debug!(?id, ?kind, "ignoring completion for an operation that is not pending");
        }
        matches
    }

    fn display_name(&self, handle: &FileHandle) -> String {
        resolve_display_name(self.files.display_name(handle), handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{FakeFiles, MemoryText};

    struct ExtensionLanguages;

    impl LanguageGuesser for ExtensionLanguages {
        fn guess(&self, file_name: &str) -> Option<String> {
            file_name.ends_with(".rs").then(|| "Rust".to_string())
        }
    }

    fn session(text: &str) -> DocumentSession<MemoryText, FakeFiles> {
        DocumentSession::new(MemoryText::with_text(text), FakeFiles::default(), Box::new(ExtensionLanguages))
    }

    fn read_done(id: OperationId, path: &str, result: std::result::Result<Vec<u8>, String>) -> ReadCompletion {
        ReadCompletion {
            id,
            handle: FileHandle::new(path),
            result,
        }
    }

    #[test]
    fn test_cursor_label_reads_only_text_before_cursor() {
        let mut s = session("ab\ncd\nef");
        s.surface_mut().place_cursor(4);

        assert_eq!(s.cursor_label(), "Ln 2, Col 2");
        assert_eq!(s.surface().full_reads.get(), 0);
    }

    #[test]
    fn test_open_success_replaces_content() {
        let mut s = session("old text");
        let mut toasts: Vec<String> = Vec::new();

        let id = s.open_file(FileHandle::new("/tmp/greeting.txt")).unwrap();
        assert_eq!(s.files().reads.len(), 1);
        assert!(s.is_busy());

        let outcome = s.finish_open(read_done(id, "/tmp/greeting.txt", Ok(b"hello\nworld".to_vec())), &mut toasts);

        assert_eq!(outcome, Some(FileOutcome::Opened("greeting.txt".to_string())));
        assert_eq!(s.surface().text, "hello\nworld");
        assert_eq!(s.cursor_label(), "Ln 1, Col 1");
        assert_eq!(s.document().display_name, "greeting.txt");
        assert_eq!(s.document().associated_file, Some(FileHandle::new("/tmp/greeting.txt")));
        assert_eq!(toasts, vec!["Opened “greeting.txt”".to_string()]);
        assert!(!s.is_busy());
    }

    #[test]
    fn test_open_read_failure_keeps_document() {
        let mut s = session("keep me");
        let before = s.document().clone();
        let mut toasts: Vec<String> = Vec::new();

        let id = s.open_file(FileHandle::new("/tmp/locked.txt")).unwrap();
        s.finish_open(read_done(id, "/tmp/locked.txt", Err("permission denied".to_string())), &mut toasts);

        assert_eq!(s.surface().text, "keep me");
        assert_eq!(s.document(), &before);
        assert_eq!(toasts, vec!["Unable to open “locked.txt”".to_string()]);
        assert!(!s.is_busy());
    }

    #[test]
    fn test_open_invalid_utf8_keeps_document() {
        let mut s = session("keep me");
        let before = s.document().clone();
        let mut toasts: Vec<String> = Vec::new();

        let id = s.open_file(FileHandle::new("/tmp/binary.bin")).unwrap();
        s.finish_open(read_done(id, "/tmp/binary.bin", Ok(vec![0x66, 0xff, 0xfe, 0x00])), &mut toasts);

        assert_eq!(s.surface().text, "keep me");
        assert_eq!(s.document(), &before);
        assert_eq!(toasts, vec!["Invalid text encoding for “binary.bin”".to_string()]);
    }

    #[test]
    fn test_open_empty_file_is_valid() {
        let mut s = session("something");
        let mut toasts: Vec<String> = Vec::new();

        let id = s.open_file(FileHandle::new("/tmp/empty.txt")).unwrap();
        s.finish_open(read_done(id, "/tmp/empty.txt", Ok(Vec::new())), &mut toasts);

        assert_eq!(s.surface().text, "");
        assert_eq!(toasts, vec!["Opened “empty.txt”".to_string()]);
    }

    #[test]
    fn test_open_uses_service_display_name() {
        let mut s = session("");
        s.files.display_names.insert(FileHandle::new("/mnt/share/x1"), "Quarterly Report".to_string());
        let mut toasts: Vec<String> = Vec::new();

        let id = s.open_file(FileHandle::new("/mnt/share/x1")).unwrap();
        s.finish_open(read_done(id, "/mnt/share/x1", Ok(b"q3".to_vec())), &mut toasts);

        assert_eq!(s.document().display_name, "Quarterly Report");
        assert_eq!(toasts, vec!["Opened “Quarterly Report”".to_string()]);
    }

    #[test]
    fn test_language_detection_and_clearing() {
        let mut s = session("");
        let mut toasts: Vec<String> = Vec::new();

        let id = s.open_file(FileHandle::new("/src/main.rs")).unwrap();
        s.finish_open(read_done(id, "/src/main.rs", Ok(b"fn main() {}".to_vec())), &mut toasts);
        assert_eq!(s.document().language_id.as_deref(), Some("Rust"));

        let id = s.open_file(FileHandle::new("/src/notes.txt")).unwrap();
        s.finish_open(read_done(id, "/src/notes.txt", Ok(b"plain".to_vec())), &mut toasts);
        assert_eq!(s.document().language_id, None);
    }

    #[test]
    fn test_second_operation_is_rejected_while_pending() {
        let mut s = session("abc");

        s.open_file(FileHandle::new("/tmp/a.txt")).unwrap();
        assert!(matches!(s.open_file(FileHandle::new("/tmp/b.txt")), Err(AppError::OperationPending)));
        assert!(matches!(s.save_file_as(FileHandle::new("/tmp/c.txt")), Err(AppError::OperationPending)));

        assert_eq!(s.files().reads.len(), 1);
        assert!(s.files().writes.is_empty());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut s = session("keep");
        let mut toasts: Vec<String> = Vec::new();

        let id = s.open_file(FileHandle::new("/tmp/a.txt")).unwrap();
        let stale = OperationId(id.0 + 41);
        let outcome = s.finish_open(read_done(stale, "/tmp/a.txt", Ok(b"new".to_vec())), &mut toasts);

        assert_eq!(outcome, None);
        assert_eq!(s.surface().text, "keep");
        assert!(toasts.is_empty());
        assert!(s.is_busy());
    }

    #[test]
    fn test_save_empty_buffer_is_noop() {
        let mut s = session("");
        let request = s.save_file_as(FileHandle::new("/tmp/out.txt")).unwrap();

        assert_eq!(request, SaveRequest::SkippedEmpty);
        assert!(s.files().writes.is_empty());
        assert!(!s.is_busy());
    }

    #[test]
    fn test_save_writes_utf8_and_reports() {
        let mut s = session("abc");
        let mut toasts: Vec<String> = Vec::new();

        let SaveRequest::Started(id) = s.save_file_as(FileHandle::new("/tmp/out.txt")).unwrap() else {
            panic!("save should have started");
        };
        assert_eq!(s.files().writes.len(), 1);
        assert_eq!(s.files().writes[0].1, vec![0x61, 0x62, 0x63]);

        let outcome = s.finish_save(
            WriteCompletion {
                id,
                handle: FileHandle::new("/tmp/out.txt"),
                result: Ok(()),
            },
            &mut toasts,
        );

        assert_eq!(outcome, Some(FileOutcome::SavedAs("out.txt".to_string())));
        assert_eq!(toasts, vec!["Saved as “out.txt”".to_string()]);
        assert!(!s.is_busy());
    }

    #[test]
    fn test_save_failure_reports_and_session_stays_usable() {
        let mut s = session("abc");
        let mut toasts: Vec<String> = Vec::new();

        let SaveRequest::Started(id) = s.save_file_as(FileHandle::new("/ro/out.txt")).unwrap() else {
            panic!("save should have started");
        };
        s.finish_save(
            WriteCompletion {
                id,
                handle: FileHandle::new("/ro/out.txt"),
                result: Err("read-only file system".to_string()),
            },
            &mut toasts,
        );
        assert_eq!(toasts, vec!["Unable to save as “out.txt”".to_string()]);

        assert!(s.open_file(FileHandle::new("/tmp/next.txt")).is_ok());
    }

    #[test]
    fn test_save_encodes_multibyte_text() {
        let mut s = session("π ≈ 3.14");
        s.save_file_as(FileHandle::new("/tmp/pi.txt")).unwrap();
        assert_eq!(s.files().writes[0].1, "π ≈ 3.14".as_bytes());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(FileOutcome::Opened("a".into()).to_string(), "Opened “a”");
        assert_eq!(FileOutcome::OpenFailed("a".into()).to_string(), "Unable to open “a”");
        assert_eq!(FileOutcome::InvalidEncoding("a".into()).to_string(), "Invalid text encoding for “a”");
        assert_eq!(FileOutcome::SavedAs("a".into()).to_string(), "Saved as “a”");
        assert_eq!(FileOutcome::SaveFailed("a".into()).to_string(), "Unable to save as “a”");
    }
}
