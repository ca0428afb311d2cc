use fltk::{
    app::Sender,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};
use syntect::highlighting::ThemeSet;
use tracing::{debug, info, warn};

use super::controllers::dark_mode::DarkModeCoordinator;
use super::controllers::modal::{ModalKind, ModalSlot};
use super::controllers::session::{DocumentSession, FileOutcome, SaveRequest};
use super::controllers::toast::{ToastQueue, ToastTick};
use super::domain::settings::{SettingKey, SyntaxTheme};
use super::domain::Message;
use super::infrastructure::files::FltkFileService;
use super::infrastructure::timers::FltkTimers;
use super::services::files::{ReadCompletion, WriteCompletion};
use super::services::language::SyntectLanguages;
use super::services::settings_store::SettingsStore;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::DARK_MODE_ITEM;
use crate::ui::theme::{Palette, ThemedWidgets, apply_theme};
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;
use crate::ui::toast_overlay::ToastOverlay;

pub type AppSession = DocumentSession<TextEditor, FltkFileService>;
pub type AppToasts = ToastQueue<ToastOverlay, FltkTimers>;

/// Settings whose change requires the colour scheme to be re-applied.
const SCHEME_KEYS: [SettingKey; 3] = [
    SettingKey::DarkMode,
    SettingKey::SyntaxThemeLight,
    SettingKey::SyntaxThemeDark,
];

/// Top-level controller: turns dispatched `Message`s into calls on the
/// session, the toast queue and the settings store.
pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub status_bar: Flex,
    pub language_label: Frame,
    pub cursor_label: Frame,
    pub session: AppSession,
    pub toasts: AppToasts,
    pub settings: SettingsStore,
    dark_mode: DarkModeCoordinator,
    modal: ModalSlot,
    themes: ThemeSet,
}

impl AppState {
    pub fn new(widgets: MainWidgets, mut settings: SettingsStore, sender: Sender<Message>) -> Self {
        let MainWidgets {
            wind,
            menu,
            text_editor,
            status_bar,
            language_label,
            cursor_label,
            toast,
        } = widgets;

        for key in SCHEME_KEYS {
            settings.subscribe(key, move |_| sender.send(Message::SettingChanged(key)));
        }

        let session = DocumentSession::new(
            text_editor,
            FltkFileService::new(sender),
            Box::new(SyntectLanguages::new()),
        );
        let toasts = ToastQueue::new(toast, FltkTimers::new(sender));

        let mut state = Self {
            window: wind,
            menu,
            status_bar,
            language_label,
            cursor_label,
            session,
            toasts,
            settings,
            dark_mode: DarkModeCoordinator::new(),
            modal: ModalSlot::new(),
            themes: ThemeSet::load_defaults(),
        };
        state.update_language_label();
        state
    }

    /// Apply the persisted preferences and put the window on screen.
    pub fn show(&mut self) {
        self.apply_color_scheme();
        self.window.show();
        if self.settings.snapshot().window_maximized {
            self.window.maximize();
        }
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.settings.dark_mode());
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        if self.session.is_busy() {
            warn!("open ignored, a file operation is still running");
            return;
        }
        let picked = match self.modal.run(ModalKind::Open, native_open_dialog) {
            Ok(picked) => picked,
            Err(e) => {
                warn!(error = %e, "open dialog not shown");
                return;
            }
        };
        let Some(handle) = picked else {
            debug!("open cancelled");
            return;
        };
        if let Err(e) = self.session.open_file(handle) {
            warn!(error = %e, "open rejected");
        }
    }

    pub fn file_save_as(&mut self) {
        if self.session.is_busy() {
            warn!("save ignored, a file operation is still running");
            return;
        }
        let picked = match self.modal.run(ModalKind::SaveAs, native_save_dialog) {
            Ok(picked) => picked,
            Err(e) => {
                warn!(error = %e, "save dialog not shown");
                return;
            }
        };
        let Some(handle) = picked else {
            debug!("save cancelled");
            return;
        };
        match self.session.save_file_as(handle) {
            Ok(SaveRequest::Started(id)) => debug!(?id, "save started"),
            Ok(SaveRequest::SkippedEmpty) => {}
            Err(e) => warn!(error = %e, "save rejected"),
        }
    }

    pub fn on_read_finished(&mut self, completion: ReadCompletion) {
        if let Some(FileOutcome::Opened(_)) = self.session.finish_open(completion, &mut self.toasts) {
            self.update_window_title();
            self.update_language_label();
            self.update_cursor_position();
        }
    }

    pub fn on_write_finished(&mut self, completion: WriteCompletion) {
        self.session.finish_save(completion, &mut self.toasts);
    }

    // --- Status bar ---

    pub fn update_cursor_position(&mut self) {
        let label = self.session.cursor_label();
        self.cursor_label.set_label(&label);
        self.status_bar.redraw();
    }

    fn update_language_label(&mut self) {
        let language = self.session.document().language_id.as_deref().unwrap_or("Plain Text");
        self.language_label.set_label(language);
        self.status_bar.redraw();
    }

    fn update_window_title(&mut self) {
        let title = self.session.document().display_name.clone();
        self.window.set_label(&title);
    }

    // --- Toasts ---

    pub fn on_toast_tick(&mut self, tick: ToastTick) {
        self.toasts.on_tick(tick);
    }

    // --- Dark mode ---

    pub fn toggle_dark_mode(&mut self) {
        match self.dark_mode.toggle(&mut self.settings) {
            Ok(dark) => debug!(dark, "dark mode toggled"),
            Err(e) => warn!(error = %e, "could not persist dark mode"),
        }
    }

    pub fn set_syntax_theme(&mut self, key: SettingKey, theme: SyntaxTheme) {
        match self.settings.set_theme(key, theme) {
            Ok(()) => debug!(%key, theme = theme.theme_key(), "syntax theme selected"),
            Err(e) => warn!(%key, error = %e, "could not persist syntax theme"),
        }
    }

    pub fn on_setting_changed(&mut self, key: SettingKey) {
        if SCHEME_KEYS.contains(&key) {
            self.apply_color_scheme();
        }
    }

    /// Re-theme every widget if the scheme on screen is out of date.
    pub fn apply_color_scheme(&mut self) {
        let Some(scheme) = self.dark_mode.sync(self.settings.snapshot()) else {
            return;
        };

        let palette = Palette::for_scheme(scheme, &self.themes);
        apply_theme(
            ThemedWidgets {
                editor: self.session.surface_mut(),
                window: &mut self.window,
                menu: &mut self.menu,
                status_bar: &mut self.status_bar,
                status_labels: [&mut self.language_label, &mut self.cursor_label],
                toast: self.toasts.view_mut(),
            },
            &palette,
        );
        self.update_menu_checkbox(DARK_MODE_ITEM, scheme.dark);

        #[cfg(target_os = "windows")]
        if self.window.shown() {
            set_windows_titlebar_theme(&self.window, scheme.dark);
        }
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }

    // --- Window lifecycle ---

    /// Mirror the window geometry into the settings store. Width and height
    /// are only recorded while the window is not maximized.
    pub fn save_window_geometry(&mut self) {
        let maximized = self.window.maximize_active();
        let mut result = self.settings.set_bool(SettingKey::WindowMaximized, maximized);
        if !maximized {
            result = result
                .and_then(|_| self.settings.set_int(SettingKey::WindowWidth, self.window.w()))
                .and_then(|_| self.settings.set_int(SettingKey::WindowHeight, self.window.h()));
        }
        if let Err(e) = result {
            warn!(error = %e, "could not save window geometry");
        }
    }

    pub fn show_about(&self) {
        show_about_dialog(&self.window, self.settings.dark_mode());
    }

    pub fn show_preferences(&self) {
        info!("preferences requested");
    }

    /// Persist geometry and close the main window, which ends the event loop.
    pub fn quit(&mut self) {
        self.save_window_geometry();
        self.toasts.clear();
        self.window.hide();
        info!("main window closed");
    }
}
