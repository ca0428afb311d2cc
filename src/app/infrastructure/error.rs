use thiserror::Error;

use crate::app::controllers::modal::ModalKind;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("A file operation is already in progress")]
    OperationPending,

    #[error("The {0} dialog is already open")]
    DialogActive(ModalKind),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("unknown key".to_string());
        assert_eq!(err.to_string(), "Settings error: unknown key");

        let err = AppError::OperationPending;
        assert_eq!(err.to_string(), "A file operation is already in progress");

        let err = AppError::DialogActive(ModalKind::SaveAs);
        assert_eq!(err.to_string(), "The Save As dialog is already open");
    }
}
