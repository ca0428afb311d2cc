use std::fmt;

use serde::{Deserialize, Serialize};

/// Highlighting colour schemes bundled with syntect.
/// Each theme has a display name and the internal syntect theme key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SyntaxTheme {
    #[default]
    Base16OceanDark,
    Base16OceanLight,
    Base16EightiesDark,
    Base16MochaDark,
    SolarizedDark,
    SolarizedLight,
    InspiredGitHub,
}

impl SyntaxTheme {
    pub const ALL: [SyntaxTheme; 7] = [
        Self::Base16OceanDark,
        Self::Base16OceanLight,
        Self::Base16EightiesDark,
        Self::Base16MochaDark,
        Self::SolarizedDark,
        Self::SolarizedLight,
        Self::InspiredGitHub,
    ];

    /// Key into `syntect::highlighting::ThemeSet::load_defaults()`
    pub fn theme_key(&self) -> &'static str {
        match self {
            Self::Base16OceanDark => "base16-ocean.dark",
            Self::Base16OceanLight => "base16-ocean.light",
            Self::Base16EightiesDark => "base16-eighties.dark",
            Self::Base16MochaDark => "base16-mocha.dark",
            Self::SolarizedDark => "Solarized (dark)",
            Self::SolarizedLight => "Solarized (light)",
            Self::InspiredGitHub => "InspiredGitHub",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Base16OceanDark => "Base16 Ocean Dark",
            Self::Base16OceanLight => "Base16 Ocean Light",
            Self::Base16EightiesDark => "Base16 Eighties Dark",
            Self::Base16MochaDark => "Base16 Mocha Dark",
            Self::SolarizedDark => "Solarized Dark",
            Self::SolarizedLight => "Solarized Light",
            Self::InspiredGitHub => "Inspired GitHub",
        }
    }
}

/// Names of the persisted preferences. Change notifications are keyed by these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    DarkMode,
    WindowWidth,
    WindowHeight,
    WindowMaximized,
    SyntaxThemeLight,
    SyntaxThemeDark,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DarkMode => "dark-mode",
            Self::WindowWidth => "window-width",
            Self::WindowHeight => "window-height",
            Self::WindowMaximized => "window-maximized",
            Self::SyntaxThemeLight => "syntax-theme-light",
            Self::SyntaxThemeDark => "syntax-theme-dark",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppSettings {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    #[serde(default)]
    pub window_maximized: bool,

    /// Highlighting scheme for light mode
    #[serde(default = "default_syntax_theme_light")]
    pub syntax_theme_light: SyntaxTheme,

    /// Highlighting scheme for dark mode
    #[serde(default = "default_syntax_theme_dark")]
    pub syntax_theme_dark: SyntaxTheme,
}

fn default_window_width() -> i32 {
    600
}

fn default_window_height() -> i32 {
    400
}

fn default_syntax_theme_light() -> SyntaxTheme {
    SyntaxTheme::Base16OceanLight
}

fn default_syntax_theme_dark() -> SyntaxTheme {
    SyntaxTheme::Base16OceanDark
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: default_window_width(),
            window_height: default_window_height(),
            window_maximized: false,
            syntax_theme_light: default_syntax_theme_light(),
            syntax_theme_dark: default_syntax_theme_dark(),
        }
    }
}

impl AppSettings {
    /// Get the highlighting scheme for the given mode
    pub fn current_syntax_theme(&self, is_dark: bool) -> SyntaxTheme {
        if is_dark {
            self.syntax_theme_dark
        } else {
            self.syntax_theme_light
        }
    }
}
