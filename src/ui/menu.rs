use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;
use crate::app::domain::settings::{AppSettings, SettingKey, SyntaxTheme};

pub const DARK_MODE_ITEM: &str = "View/Dark Mode";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Preferences", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ShowPreferences) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    let dm_flag = if settings.dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(DARK_MODE_ITEM, Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    for (submenu, key, current) in [
        ("View/Light Theme", SettingKey::SyntaxThemeLight, settings.syntax_theme_light),
        ("View/Dark Theme", SettingKey::SyntaxThemeDark, settings.syntax_theme_dark),
    ] {
        for theme in SyntaxTheme::ALL {
            let flag = if theme == current { MenuFlag::Radio | MenuFlag::Value } else { MenuFlag::Radio };
            let path = format!("{}/{}", submenu, theme.display_name());
            menu.add(&path, Shortcut::None, flag, { let s = *s; move |_| s.send(Message::SetSyntaxTheme(key, theme)) });
        }
    }

    // Help
    menu.add("Help/About Text Viewer", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
