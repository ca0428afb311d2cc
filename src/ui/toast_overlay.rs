use fltk::{
    draw,
    enums::{Color, FrameType},
    frame::Frame,
    prelude::*,
    window::Window,
};

use crate::app::controllers::toast::ToastView;

const PADDING_X: i32 = 16;
const PADDING_Y: i32 = 10;
const BOTTOM_GAP: i32 = 16;

/// A rounded label floating above the bottom edge of the main window.
///
/// FLTK has no opacity, so the exit animation is a fade towards the
/// background colour followed by removal when the exit timer fires.
pub struct ToastOverlay {
    frame: Frame,
    window: Window,
    bottom_offset: i32,
    background: Color,
    foreground: Color,
}

impl ToastOverlay {
    /// Must be called while `window` is the current group.
    pub fn new(window: &Window, bottom_offset: i32) -> Self {
        let mut frame = Frame::new(0, 0, 0, 0, None);
        frame.set_frame(FrameType::RFlatBox);
        frame.set_label_size(14);
        frame.hide();

        let background = Color::from_rgb(50, 50, 50);
        let foreground = Color::White;
        frame.set_color(background);
        frame.set_label_color(foreground);

        Self {
            frame,
            window: window.clone(),
            bottom_offset,
            background,
            foreground,
        }
    }

    pub fn set_colors(&mut self, background: Color, foreground: Color) {
        self.background = background;
        self.foreground = foreground;
        self.frame.set_color(background);
        self.frame.set_label_color(foreground);
        if self.frame.visible() {
            self.frame.redraw();
        }
    }

    fn place(&mut self, text: &str) {
        draw::set_font(self.frame.label_font(), self.frame.label_size());
        let (text_w, text_h) = draw::measure(text, false);
        let w = (text_w + 2 * PADDING_X).min(self.window.w() - 2 * PADDING_X);
        let h = text_h + 2 * PADDING_Y;
        let x = (self.window.w() - w) / 2;
        let y = self.window.h() - self.bottom_offset - BOTTOM_GAP - h;
        self.frame.resize(x, y, w, h);
    }
}

impl ToastView for ToastOverlay {
    fn present(&mut self, text: &str) {
        self.frame.set_label(text);
        self.frame.set_color(self.background);
        self.frame.set_label_color(self.foreground);
        self.place(text);
        self.frame.show();
        self.window.redraw();
    }

    fn begin_exit(&mut self) {
        self.frame.set_color(self.background.inactive());
        self.frame.set_label_color(Color::color_average(self.foreground, self.background, 0.4));
        self.frame.redraw();
    }

    fn remove(&mut self) {
        self.frame.hide();
        self.frame.set_label("");
        self.window.redraw();
    }
}
