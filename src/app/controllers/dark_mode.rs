use tracing::info;

use crate::app::domain::settings::{AppSettings, SyntaxTheme};
use crate::app::infrastructure::error::Result;
use crate::app::services::settings_store::SettingsStore;

/// The visual mode currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub dark: bool,
    pub syntax_theme: SyntaxTheme,
}

impl ColorScheme {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            dark: settings.dark_mode,
            syntax_theme: settings.current_syntax_theme(settings.dark_mode),
        }
    }

    /// syntect theme key for the highlighting scheme
    pub fn scheme_id(&self) -> &'static str {
        self.syntax_theme.theme_key()
    }
}

/// Bridges the persisted `dark-mode` flag to the applied theme.
#[derive(Debug, Default)]
pub struct DarkModeCoordinator {
    applied: Option<ColorScheme>,
}

impl DarkModeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Option<ColorScheme> {
        self.applied
    }

    /// Flip and persist the preference. Observers of `dark-mode` on the
    /// store run before this returns.
    pub fn toggle(&self, store: &mut SettingsStore) -> Result<bool> {
        store.toggle_dark_mode()
    }

    /// Returns the scheme to apply, or `None` when it is already on screen.
    pub fn sync(&mut self, settings: &AppSettings) -> Option<ColorScheme> {
        let scheme = ColorScheme::from_settings(settings);
        if self.applied == Some(scheme) {
            return None;
        }
        info!(dark = scheme.dark, scheme = scheme.scheme_id(), "applying colour scheme");
        self.applied = Some(scheme);
        Some(scheme)
    }
}
