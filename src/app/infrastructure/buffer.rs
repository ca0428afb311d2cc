use fltk::{
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::controllers::session::TextSurface;

unsafe extern "C" {
    fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
    fn Fl_Text_Buffer_text_range(buf: *mut std::ffi::c_void, start: i32, end: i32) -> *mut std::ffi::c_char;
    fn free(ptr: *mut std::ffi::c_void);
}

/// Copy and release a `malloc()`'d, NUL-terminated string from FLTK.
///
/// SAFETY: `ptr` must be null or a string allocated with `malloc()` that
/// nothing else frees.
unsafe fn take_c_string(ptr: *mut std::ffi::c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let text = unsafe { std::ffi::CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    // SAFETY: malloc'd by FLTK and owned by us from here on.
    unsafe { free(ptr as *mut std::ffi::c_void) };
    text
}

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// `TextBuffer::text()` copies the `malloc()`'d string returned by
/// `Fl_Text_Buffer_text()` into a `String` but never frees the original, so
/// every call leaks the full buffer size. Going through the FFI directly lets
/// us release it.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    // SAFETY: `buf.as_ptr()` is the live Fl_Text_Buffer owned by `buf`, and
    // Fl_Text_Buffer_text returns a malloc'd copy (or null).
    unsafe { take_c_string(Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void)) }
}

/// Bytes `start..end` of the buffer, without the leak of `TextBuffer::text_range()`.
pub fn buffer_text_range_no_leak(buf: &TextBuffer, start: i32, end: i32) -> String {
    // SAFETY: as above; FLTK clamps the range to the buffer.
    unsafe {
        take_c_string(Fl_Text_Buffer_text_range(
            buf.as_ptr() as *mut std::ffi::c_void,
            start,
            end,
        ))
    }
}

/// The editor widget is the document's text surface. FLTK positions are byte
/// offsets; the surface speaks characters.
impl TextSurface for TextEditor {
    fn text(&self) -> String {
        self.buffer()
            .map(|buf| buffer_text_no_leak(&buf))
            .unwrap_or_default()
    }

    fn set_text(&mut self, text: &str) {
        if let Some(mut buf) = self.buffer() {
            buf.set_text(text);
            buf.unselect();
        }
    }

    fn cursor(&self) -> usize {
        self.text_before_cursor().chars().count()
    }

    fn text_before_cursor(&self) -> String {
        let byte = self.insert_position().max(0);
        self.buffer()
            .map(|buf| buffer_text_range_no_leak(&buf, 0, byte))
            .unwrap_or_default()
    }

    fn place_cursor(&mut self, char_offset: usize) {
        let text = TextSurface::text(self);
        let byte = text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        self.set_insert_position(byte as i32);
        self.show_insert_position();
    }
}
