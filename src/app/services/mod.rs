//! Services layer - business operations and the seams to the toolkit.
//!
//! - File read/replace contract and blocking primitives
//! - Settings persistence and change notification
//! - Language detection
//! - Cursor position projection

pub mod files;
pub mod language;
pub mod position;
pub mod settings_store;
