//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages)
//! - `controllers/` - Orchestration (ToastQueue, DocumentSession, dark mode, modal slot)
//! - `services/` - Business operations (file I/O contract, settings store, language, cursor)
//! - `infrastructure/` - External integrations (FLTK buffer/timers/files, platform, logging, error)
//! - `state.rs` - Main window controller

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient external access
pub use controllers::session::{DocumentSession, FileOutcome, TextSurface};
pub use controllers::toast::{Notify, ToastQueue, ToastView};
pub use domain::{AppSettings, Document, FileHandle, Message, SettingKey};
pub use infrastructure::error::{AppError, Result};
pub use services::position::cursor_label;
pub use services::settings_store::SettingsStore;
