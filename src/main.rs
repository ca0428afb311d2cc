#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use fltk::app;
use tracing::{error, info};

use text_viewer::app::domain::Message;
use text_viewer::app::infrastructure::logging::init_logging;
use text_viewer::app::services::settings_store::SettingsStore;
use text_viewer::app::state::AppState;
use text_viewer::ui::main_window::build_main_window;
use text_viewer::ui::menu::build_menu;

fn main() {
    init_logging();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = SettingsStore::load();
    info!(path = ?settings.path(), "settings loaded");

    let mut widgets = build_main_window(settings.snapshot(), &sender);
    build_menu(&mut widgets.menu, &sender, settings.snapshot());

    let mut state = AppState::new(widgets, settings, sender);
    state.show();

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::FileOpen => state.file_open(),
            Message::FileSaveAs => state.file_save_as(),
            Message::FileQuit | Message::WindowClose => state.quit(),
            Message::ReadFinished(completion) => state.on_read_finished(completion),
            Message::WriteFinished(completion) => state.on_write_finished(completion),
            Message::CursorMoved => state.update_cursor_position(),
            Message::ToggleDarkMode => state.toggle_dark_mode(),
            Message::SetSyntaxTheme(key, theme) => state.set_syntax_theme(key, theme),
            Message::SettingChanged(key) => state.on_setting_changed(key),
            Message::ToastTick(tick) => state.on_toast_tick(tick),
            Message::ShowPreferences => state.show_preferences(),
            Message::ShowAbout => state.show_about(),
        }
    }

    if let Err(e) = state.settings.save() {
        error!(error = %e, "failed to save settings on exit");
    }
}
