use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;

pub const PROGRAM_NAME: &str = "text-viewer";
pub const AUTHORS: &[&str] = &["Example Author"];
pub const COPYRIGHT: &str = "\u{00a9} 2022 Example Author";

/// Show the modal About dialog
pub fn show_about_dialog(parent: &Window, dark: bool) {
    let mut dialog = Window::default()
        .with_size(360, 260)
        .with_label(&format!("About {}", PROGRAM_NAME));
    dialog.set_pos(
        parent.x() + (parent.w() - dialog.w()) / 2,
        parent.y() + (parent.h() - dialog.h()) / 2,
    );
    dialog.make_modal(true);

    let (bg, fg, dim) = if dark {
        (Color::from_rgb(35, 35, 35), Color::from_rgb(220, 220, 220), Color::from_rgb(150, 150, 150))
    } else {
        (Color::from_rgb(240, 240, 240), Color::Black, Color::from_rgb(100, 100, 100))
    };
    dialog.set_color(bg);

    let mut flex = Flex::new(10, 10, 340, 240, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default().with_label(PROGRAM_NAME);
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(fg);
    flex.fixed(&title, 40);

    let mut version = Frame::default().with_label(&format!("Version {}", env!("CARGO_PKG_VERSION")));
    version.set_label_size(14);
    version.set_label_color(fg);
    flex.fixed(&version, 25);

    let mut credits = Frame::default().with_label(&format!("{}\n\nWritten by {}", COPYRIGHT, AUTHORS.join(", ")));
    credits.set_label_size(12);
    credits.set_label_color(dim);
    credits.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 32);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| dialog_close.hide());

    dialog.show();
    run_dialog(&dialog);
}
