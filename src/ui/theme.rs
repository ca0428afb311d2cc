use fltk::{
    enums::Color,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};
use syntect::highlighting::{Color as SyntectColor, ThemeSet};

use super::toast_overlay::ToastOverlay;
use crate::app::controllers::dark_mode::ColorScheme;

/// Colours for every themed widget, derived from a highlighting scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub cursor: Color,
    pub selection: Color,
    pub chrome_bg: Color,
    pub chrome_fg: Color,
    pub menu_hover: Color,
    pub toast_bg: Color,
    pub toast_fg: Color,
}

impl Palette {
    /// Editor colours come from the syntect theme when it defines them;
    /// window chrome follows the light/dark flag.
    pub fn for_scheme(scheme: ColorScheme, themes: &ThemeSet) -> Self {
        let base = if scheme.dark { Self::dark() } else { Self::light() };
        let Some(settings) = themes.themes.get(scheme.scheme_id()).map(|t| &t.settings) else {
            return base;
        };

        Self {
            editor_bg: settings.background.map(to_fltk).unwrap_or(base.editor_bg),
            editor_fg: settings.foreground.map(to_fltk).unwrap_or(base.editor_fg),
            cursor: settings.caret.map(to_fltk).unwrap_or(base.cursor),
            selection: settings.selection.map(to_fltk).unwrap_or(base.selection),
            ..base
        }
    }

    fn dark() -> Self {
        Self {
            editor_bg: Color::from_rgb(30, 30, 30),
            editor_fg: Color::from_rgb(220, 220, 220),
            cursor: Color::from_rgb(255, 255, 255),
            selection: Color::from_rgb(70, 70, 100),
            chrome_bg: Color::from_rgb(35, 35, 35),
            chrome_fg: Color::from_rgb(220, 220, 220),
            menu_hover: Color::from_rgb(60, 60, 60),
            toast_bg: Color::from_rgb(230, 230, 230),
            toast_fg: Color::from_rgb(30, 30, 30),
        }
    }

    fn light() -> Self {
        Self {
            editor_bg: Color::White,
            editor_fg: Color::Black,
            cursor: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
            chrome_bg: Color::from_rgb(240, 240, 240),
            chrome_fg: Color::Black,
            menu_hover: Color::from_rgb(200, 200, 200),
            toast_bg: Color::from_rgb(50, 50, 50),
            toast_fg: Color::White,
        }
    }
}

fn to_fltk(c: SyntectColor) -> Color {
    Color::from_rgb(c.r, c.g, c.b)
}

pub struct ThemedWidgets<'a> {
    pub editor: &'a mut TextEditor,
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub status_bar: &'a mut Flex,
    pub status_labels: [&'a mut Frame; 2],
    pub toast: &'a mut ToastOverlay,
}

pub fn apply_theme(widgets: ThemedWidgets, palette: &Palette) {
    let ThemedWidgets { editor, window, menu, status_bar, status_labels, toast } = widgets;

    editor.set_color(palette.editor_bg);
    editor.set_text_color(palette.editor_fg);
    editor.set_cursor_color(palette.cursor);
    editor.set_selection_color(palette.selection);

    window.set_color(palette.chrome_bg);
    window.set_label_color(palette.chrome_fg);
    menu.set_color(palette.chrome_bg);
    menu.set_text_color(palette.chrome_fg);
    menu.set_selection_color(palette.menu_hover);
    status_bar.set_color(palette.chrome_bg);
    for label in status_labels {
        label.set_label_color(palette.chrome_fg);
    }
    toast.set_colors(palette.toast_bg, palette.toast_fg);

    editor.redraw();
    menu.redraw();
    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
    let on: i32 = if is_dark { 1 } else { 0 };

    // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE (Windows 11 / 10 2004+),
    // 19 = the same attribute on Windows 10 1809-1903
    for attribute in [20, 19] {
        // SAFETY: `hwnd` belongs to a shown window and `on` outlives the call.
        unsafe {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::SyntaxTheme;

    fn luminance(c: Color) -> u32 {
        let (r, g, b) = c.to_rgb();
        r as u32 + g as u32 + b as u32
    }

    #[test]
    fn test_dark_scheme_is_darker_than_light() {
        let themes = ThemeSet::load_defaults();
        let dark = Palette::for_scheme(ColorScheme { dark: true, syntax_theme: SyntaxTheme::Base16OceanDark }, &themes);
        let light = Palette::for_scheme(ColorScheme { dark: false, syntax_theme: SyntaxTheme::Base16OceanLight }, &themes);

        assert!(luminance(dark.editor_bg) < luminance(light.editor_bg));
        assert!(luminance(dark.chrome_bg) < luminance(light.chrome_bg));
    }

    #[test]
    fn test_editor_colours_follow_scheme() {
        let themes = ThemeSet::load_defaults();
        let theme = &themes.themes["base16-ocean.dark"];
        let expected = theme.settings.background.map(to_fltk).unwrap();

        let palette = Palette::for_scheme(ColorScheme { dark: true, syntax_theme: SyntaxTheme::Base16OceanDark }, &themes);
        assert_eq!(palette.editor_bg, expected);
    }

    #[test]
    fn test_missing_theme_falls_back_to_base() {
        let palette = Palette::for_scheme(
            ColorScheme { dark: true, syntax_theme: SyntaxTheme::Base16OceanDark },
            &ThemeSet::new(),
        );
        assert_eq!(palette, Palette::dark());
    }
}
