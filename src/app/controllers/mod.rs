//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Toast notification queue
//! - Document open/save session
//! - Dark mode / colour scheme selection
//! - Active file dialog tracking

pub mod dark_mode;
pub mod modal;
pub mod session;
pub mod toast;
