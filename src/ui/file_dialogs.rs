use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::domain::FileHandle;

/// Run a native chooser; an empty filename means the user cancelled.
fn run_chooser(mut chooser: NativeFileChooser) -> Option<FileHandle> {
    chooser.show(); // blocks until the dialog closes
    let path = chooser.filename();
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(FileHandle::new(path))
    }
}

pub fn native_open_dialog() -> Option<FileHandle> {
    let mut chooser = NativeFileChooser::new(FileDialogType::BrowseFile);
    chooser.set_title("Open File");
    run_chooser(chooser)
}

pub fn native_save_dialog() -> Option<FileHandle> {
    let mut chooser = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    chooser.set_title("Save File As");
    chooser.set_option(FileDialogOptions::SaveAsConfirm);
    run_chooser(chooser)
}
