use fltk::{
    app::{self, Sender},
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::toast_overlay::ToastOverlay;
use crate::app::domain::document::UNTITLED;
use crate::app::domain::{AppSettings, Message};

const MENU_HEIGHT: i32 = 30;
const STATUS_BAR_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub status_bar: Flex,
    pub language_label: Frame,
    pub cursor_label: Frame,
    pub toast: ToastOverlay,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let (width, height) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, width, height, None);
    wind.set_label(UNTITLED);
    wind.set_xclass("text-viewer");

    let mut flex = Flex::new(0, 0, width, height, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_frame(FrameType::FlatBox);

    // Status bar: spacer | language | cursor position
    let mut status_bar = Flex::default();
    status_bar.set_type(FlexType::Row);
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_margins(8, 0, 8, 0);
    Frame::default();
    let mut language_label = Frame::default();
    language_label.set_label_size(12);
    language_label.set_align(Align::Right | Align::Inside);
    status_bar.fixed(&language_label, 120);
    let mut cursor_label = Frame::default().with_label("Ln 1, Col 1");
    cursor_label.set_label_size(12);
    cursor_label.set_align(Align::Right | Align::Inside);
    status_bar.fixed(&cursor_label, 110);
    status_bar.end();
    flex.fixed(&status_bar, STATUS_BAR_HEIGHT);

    flex.end();

    // Drawn after the layout so it sits on top of the editor
    let toast = ToastOverlay::new(&wind, STATUS_BAR_HEIGHT);

    wind.end();
    wind.resizable(&flex);

    // Keystrokes, clicks and pastes can all move the cursor. Returning false
    // lets the editor handle the event itself.
    let s = *sender;
    text_editor.handle(move |_, ev| {
        if matches!(
            ev,
            Event::KeyDown | Event::KeyUp | Event::Push | Event::Drag | Event::Released | Event::Paste
        ) {
            s.send(Message::CursorMoved);
        }
        false
    });

    // Route the close button through the dispatch loop so geometry is saved
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        menu,
        text_editor,
        status_bar,
        language_label,
        cursor_label,
        toast,
    }
}
