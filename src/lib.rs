//! A minimal FLTK text viewer: open a file, edit it, save it under a new
//! name, switch between light and dark mode. Status is reported through
//! short-lived toast notifications.

pub mod app;
pub mod ui;
