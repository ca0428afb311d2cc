use std::fmt;

use tracing::warn;

use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Open,
    SaveAs,
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("Open"),
            Self::SaveAs => f.write_str("Save As"),
        }
    }
}

/// Tracks the one file dialog that may be on screen.
#[derive(Debug, Default)]
pub struct ModalSlot {
    active: Option<ModalKind>,
}

impl ModalSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ModalKind> {
        self.active
    }

    pub fn begin(&mut self, kind: ModalKind) -> Result<()> {
        if let Some(active) = self.active {
            warn!(requested = %kind, %active, "dialog request rejected");
            return Err(AppError::DialogActive(active));
        }
        self.active = Some(kind);
        Ok(())
    }

    /// Release the slot. A mismatched `kind` leaves the slot untouched.
    pub fn finish(&mut self, kind: ModalKind) {
        if self.active == Some(kind) {
            self.active = None;
        }
    }

    /// Hold the slot for the duration of `f`, typically a blocking dialog.
    pub fn run<T>(&mut self, kind: ModalKind, f: impl FnOnce() -> T) -> Result<T> {
        self.begin(kind)?;
        let out = f();
        self.finish(kind);
        Ok(out)
    }
}
