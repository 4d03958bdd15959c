use serde::Serialize;
use std::io;

use crate::models::operation::Operation;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("'{0}' not found.")]
    NotFound(String),

    #[error("'{0}' already exists.")]
    AlreadyExists(String),

    #[error("'{name}' is not a valid name: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("could not {operation} '{item}': {cause}")]
    OperationFailed {
        operation: Operation,
        item: String,
        cause: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    General(String),
}

impl AppError {
    /// Maps an OS error raised while acting on `item` onto the taxonomy the
    /// dialogs report: missing targets, collisions, and everything else.
    pub fn from_io(err: io::Error, operation: Operation, item: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(item.to_string()),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(item.to_string()),
            _ => Self::OperationFailed {
                operation,
                item: item.to_string(),
                cause: err.to_string(),
            },
        }
    }

    pub fn failed(operation: Operation, item: &str, cause: impl Into<String>) -> Self {
        Self::OperationFailed {
            operation,
            item: item.to_string(),
            cause: cause.into(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_names_the_item() {
        let err = AppError::from_io(
            io::Error::from(io::ErrorKind::NotFound),
            Operation::Rename,
            "notes.txt",
        );
        assert!(matches!(err, AppError::NotFound(ref item) if item == "notes.txt"));
        assert_eq!(err.to_string(), "'notes.txt' not found.");
    }

    #[test]
    fn io_already_exists_names_the_item() {
        let err = AppError::from_io(
            io::Error::from(io::ErrorKind::AlreadyExists),
            Operation::Create,
            "docs",
        );
        assert_eq!(err.to_string(), "'docs' already exists.");
    }

    #[test]
    fn other_io_errors_become_operation_failures() {
        let err = AppError::from_io(
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            Operation::Delete,
            "locked",
        );
        match &err {
            AppError::OperationFailed {
                operation, item, ..
            } => {
                assert_eq!(*operation, Operation::Delete);
                assert_eq!(item, "locked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "could not delete 'locked': permission denied");
    }

    #[test]
    fn serializes_as_display_string() {
        let err = AppError::NotFound("gone".to_string());
        assert_eq!(serde_json::to_string(&err).unwrap(), "\"'gone' not found.\"");
    }
}
