//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK text buffer access
//! - FLTK timers and deferred file I/O
//! - Platform-specific detection
//! - Logging setup
//! - Error types

pub mod buffer;
pub mod error;
pub mod files;
pub mod logging;
pub mod platform;
pub mod timers;
