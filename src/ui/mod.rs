//! FLTK widgets: window layout, menu, dialogs, theming and the toast overlay.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
pub mod toast_overlay;
