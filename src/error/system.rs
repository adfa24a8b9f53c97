//! System-related error types.
//!
//! Filesystem and OS failures: the log directory, the terminal, the
//! preview listener socket.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// Could not determine a data directory for the log file.
    NoDataDirectory,

    /// Failed to create a directory.
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Binding a local socket failed.
    BindFailed { addr: String, message: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::NoDataDirectory => {
                "Could not determine a data directory for log files.".to_string()
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Failed to create directory '{}'.", path.display())
            }
            SystemError::BindFailed { addr, .. } => {
                format!("Could not listen on {}. Is the port already in use?", addr)
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'.", operation, p.display()),
                None => format!("Failed to {}.", operation),
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::NoDataDirectory => "SYS_NO_DATA_DIR",
            SystemError::DirectoryCreationFailed { .. } => "SYS_MKDIR",
            SystemError::BindFailed { .. } => "SYS_BIND",
            SystemError::IoError { .. } => "SYS_IO",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::NoDataDirectory => write!(f, "no data directory"),
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(f, "mkdir {}: {}", path.display(), message)
            }
            SystemError::BindFailed { addr, message } => write!(f, "bind {}: {}", addr, message),
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "{} {}: {}", operation, p.display(), message),
                None => write!(f, "{}: {}", operation, message),
            },
        }
    }
}

impl std::error::Error for SystemError {}

impl From<std::io::Error> for SystemError {
    fn from(err: std::io::Error) -> Self {
        SystemError::IoError {
            operation: "perform I/O".to_string(),
            path: None,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SystemError = io_err.into();
        assert_eq!(err.error_code(), "SYS_IO");
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_bind_failed_message() {
        let err = SystemError::BindFailed {
            addr: "127.0.0.1:8080".to_string(),
            message: "address in use".to_string(),
        };
        assert!(err.user_message().contains("127.0.0.1:8080"));
    }
}
