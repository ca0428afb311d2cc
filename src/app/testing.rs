//! In-memory stand-ins for the FLTK-backed seams, shared by unit tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::time::Duration;

use crate::app::controllers::session::TextSurface;
use crate::app::controllers::toast::{Notify, Timers, ToastTick, ToastView};
use crate::app::domain::FileHandle;
use crate::app::services::files::{FileRequest, FileService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Present(String),
    BeginExit,
    Remove,
}

#[derive(Default)]
pub struct FakeView {
    pub visible: Option<String>,
    pub exiting: bool,
    pub events: Vec<ViewEvent>,
}

impl FakeView {
    /// Toasts presented and not yet removed.
    pub fn live_count(&self) -> usize {
        let presented = self.events.iter().filter(|e| matches!(e, ViewEvent::Present(_))).count();
        let removed = self.events.iter().filter(|e| **e == ViewEvent::Remove).count();
        presented - removed
    }
}

impl ToastView for FakeView {
    fn present(&mut self, text: &str) {
        self.visible = Some(text.to_string());
        self.exiting = false;
        self.events.push(ViewEvent::Present(text.to_string()));
    }

    fn begin_exit(&mut self) {
        self.exiting = true;
        self.events.push(ViewEvent::BeginExit);
    }

    fn remove(&mut self) {
        self.visible = None;
        self.exiting = false;
        self.events.push(ViewEvent::Remove);
    }
}

struct Armed {
    id: u64,
    delay: Duration,
    tick: ToastTick,
}

/// Timers that only fire when a test says so.
#[derive(Default)]
pub struct FakeTimers {
    next_id: u64,
    armed: Vec<Armed>,
    pub cancelled: Vec<u64>,
    fired: Vec<u64>,
}

impl FakeTimers {
    fn is_live(&self, id: u64) -> bool {
        !self.cancelled.contains(&id) && !self.fired.contains(&id)
    }

    /// Delays of every timer that has neither fired nor been cancelled.
    pub fn live(&self) -> Vec<Duration> {
        self.armed
            .iter()
            .filter(|a| self.is_live(a.id))
            .map(|a| a.delay)
            .collect()
    }

    pub fn last_armed(&self) -> (Duration, ToastTick) {
        let armed = self.armed.last().expect("no timer armed");
        (armed.delay, armed.tick)
    }

    /// Mark the oldest live timer as fired and return what it carried.
    pub fn fire_live(&mut self) -> (Duration, ToastTick) {
        let (id, delay, tick) = self
            .armed
            .iter()
            .find(|a| self.is_live(a.id))
            .map(|a| (a.id, a.delay, a.tick))
            .expect("no live timer");
        self.fired.push(id);
        (delay, tick)
    }
}

impl Timers for FakeTimers {
    type Handle = u64;

    fn arm(&mut self, delay: Duration, tick: ToastTick) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.armed.push(Armed { id, delay, tick });
        id
    }

    fn cancel(&mut self, handle: u64) {
        self.cancelled.push(handle);
    }
}

impl Notify for Vec<String> {
    fn notify(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Records requests; completions are fed back by the test.
#[derive(Default)]
pub struct FakeFiles {
    pub reads: Vec<FileRequest>,
    pub writes: Vec<(FileRequest, Vec<u8>)>,
    pub display_names: HashMap<FileHandle, String>,
}

impl FileService for FakeFiles {
    fn read_all(&mut self, request: FileRequest) {
        self.reads.push(request);
    }

    fn replace_all(&mut self, request: FileRequest, bytes: Vec<u8>) {
        self.writes.push((request, bytes));
    }

    fn display_name(&self, handle: &FileHandle) -> Option<String> {
        self.display_names.get(handle).cloned()
    }
}

#[derive(Default)]
pub struct MemoryText {
    pub text: String,
    pub cursor: usize,
    /// Calls to `text()`, i.e. copies of the whole buffer.
    pub full_reads: Cell<usize>,
}

impl MemoryText {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
            full_reads: Cell::new(0),
        }
    }
}

impl TextSurface for MemoryText {
    fn text(&self) -> String {
        self.full_reads.set(self.full_reads.get() + 1);
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.cursor.min(text.chars().count());
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn place_cursor(&mut self, char_offset: usize) {
        self.cursor = char_offset.min(self.text.chars().count());
    }

    fn text_before_cursor(&self) -> String {
        self.text.chars().take(self.cursor).collect()
    }
}
