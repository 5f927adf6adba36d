use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for texthooks operations
#[derive(Error, Debug)]
pub enum TexthooksError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Cannot process {} as {encoding}: {message}", path.display())]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
        message: String,
    },

    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Regex compilation failed: {0}")]
    Regex(#[from] regex::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl TexthooksError {
    pub fn usage(message: impl Into<String>) -> Self {
        TexthooksError::Usage(message.into())
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TexthooksError::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias for texthooks operations
pub type TexthooksResult<T> = Result<T, TexthooksError>;

/// Helper trait for adding context to io errors
pub trait ErrorContext<T> {
    fn with_path_context<C, F>(self, f: F) -> TexthooksResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> ErrorContext<T> for Result<T, io::Error> {
    fn with_path_context<C, F>(self, f: F) -> TexthooksResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            TexthooksError::Io(io::Error::new(e.kind(), format!("{}: {}", f(), e)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = TexthooksError::FileNotFound {
            path: PathBuf::from(".github/CODEOWNERS"),
        };
        let display = format!("{}", error);

        assert!(display.contains("File not found"));
        assert!(display.contains(".github/CODEOWNERS"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(TexthooksError::usage("bad flag").exit_code(), 2);

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(TexthooksError::from(io_error).exit_code(), 1);

        let encoding_error = TexthooksError::Encoding {
            path: PathBuf::from("notes.txt"),
            encoding: "utf-8",
            message: "invalid byte 0xFF at offset 3".to_string(),
        };
        assert_eq!(encoding_error.exit_code(), 1);
        assert!(encoding_error.to_string().contains("notes.txt as utf-8"));
    }

    #[test]
    fn test_error_context() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let result: Result<(), io::Error> = Err(io_error);

        let contextualized = result.with_path_context(|| "Failed to write notes.txt");
        let error = contextualized.unwrap_err();
        let display = format!("{}", error);

        assert!(display.contains("Failed to write notes.txt"));
        match error {
            TexthooksError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("Expected io error, got {:?}", other),
        }
    }
}
