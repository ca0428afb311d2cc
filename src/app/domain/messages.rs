use super::settings::{SettingKey, SyntaxTheme};
use crate::app::controllers::toast::ToastTick;
use crate::app::services::files::{ReadCompletion, WriteCompletion};

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks, timers and deferred file I/O each send one of these;
/// the dispatch loop in main hands them to `AppState`.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileOpen,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Deferred file I/O
    ReadFinished(ReadCompletion),
    WriteFinished(WriteCompletion),

    // Editor
    CursorMoved,

    // View
    ToggleDarkMode,
    /// Pick the highlighting scheme for one mode
    /// (`SettingKey::SyntaxThemeLight` or `SettingKey::SyntaxThemeDark`).
    SetSyntaxTheme(SettingKey, SyntaxTheme),
    SettingChanged(SettingKey),

    // Toasts
    ToastTick(ToastTick),

    // Help
    ShowPreferences,
    ShowAbout,
}
