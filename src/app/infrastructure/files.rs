use fltk::app::{self, Sender};
use tracing::debug;

use crate::app::domain::{FileHandle, Message};
use crate::app::services::files::{
    FileRequest, FileService, ReadCompletion, WriteCompletion, local_display_name, read_file, replace_file,
};

/// Local-disk `FileService`.
///
/// Requests return at once; the I/O runs from a zero-delay timeout on the
/// next event-loop iteration and the result is posted back through the
/// channel. Everything stays on the UI thread.
pub struct FltkFileService {
    sender: Sender<Message>,
}

impl FltkFileService {
    pub fn new(sender: Sender<Message>) -> Self {
        Self { sender }
    }
}

/// One pending disk operation.
///
/// fltk-rs never frees the boxed timeout closure, so the closure only keeps
/// this job and `run` moves the payload out. The document bytes are dropped
/// as soon as the operation completes.
enum FileJob {
    Read(FileRequest),
    Replace(FileRequest, Vec<u8>),
}

impl FileJob {
    fn run(self) -> Message {
        match self {
            Self::Read(request) => {
                let result = read_file(request.handle.path()).map_err(|e| e.to_string());
                debug!(path = %request.handle.path().display(), ok = result.is_ok(), "read finished");
                Message::ReadFinished(ReadCompletion {
                    id: request.id,
                    handle: request.handle,
                    result,
                })
            }
            Self::Replace(request, bytes) => {
                let result = replace_file(request.handle.path(), &bytes).map_err(|e| e.to_string());
                debug!(path = %request.handle.path().display(), ok = result.is_ok(), "write finished");
                Message::WriteFinished(WriteCompletion {
                    id: request.id,
                    handle: request.handle,
                    result,
                })
            }
        }
    }
}

/// Run `job` at most once, however often it is polled.
fn run_once(job: &mut Option<FileJob>) -> Option<Message> {
    job.take().map(FileJob::run)
}

fn defer(sender: Sender<Message>, job: FileJob) {
    let mut job = Some(job);
    app::add_timeout3(0.0, move |_| {
        if let Some(msg) = run_once(&mut job) {
            sender.send(msg);
        }
    });
}

impl FileService for FltkFileService {
    fn read_all(&mut self, request: FileRequest) {
        defer(self.sender, FileJob::Read(request));
    }

    fn replace_all(&mut self, request: FileRequest, bytes: Vec<u8>) {
        defer(self.sender, FileJob::Replace(request, bytes));
    }

    fn display_name(&self, handle: &FileHandle) -> Option<String> {
        local_display_name(handle)
    }
}
