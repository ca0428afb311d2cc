//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and FileHandle
//! - Application settings and their keys
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;

pub use document::{Document, FileHandle};
pub use messages::Message;
pub use settings::{AppSettings, SettingKey, SyntaxTheme};
