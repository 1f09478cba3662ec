//! Driver-level errors: everything that stops a command before the
//! pipeline runs.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("'{path}' is {len} bytes; sources are limited to {max} bytes", max = lox_lexer::MAX_SOURCE_LEN)]
    SourceTooLarge { path: String, len: u64 },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value for --error-limit: '{0}'")]
    InvalidErrorLimit(String),
    #[error("Unknown error code: {0}")]
    UnknownErrorCode(String),
}

impl DriverError {
    fn from_io(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Io { path, source },
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::NotFound { .. }
            | DriverError::PermissionDenied { .. }
            | DriverError::InvalidUtf8 { .. }
            | DriverError::SourceTooLarge { .. }
            | DriverError::Io { .. } => crate::EXIT_IO_ERROR,
            DriverError::UnknownOption(_)
            | DriverError::InvalidErrorLimit(_)
            | DriverError::UnknownErrorCode(_) => crate::EXIT_USAGE,
        }
    }
}

/// Read a whole source file.
///
/// The size is checked before reading, so an oversized file is refused
/// without loading it.
pub fn read_file(path: &str) -> Result<String, DriverError> {
    let len = std::fs::metadata(path)
        .map_err(|e| DriverError::from_io(path, e))?
        .len();
    if len > u64::from(u32::MAX) {
        return Err(DriverError::SourceTooLarge {
            path: path.to_string(),
            len,
        });
    }
    std::fs::read_to_string(path).map_err(|e| DriverError::from_io(path, e))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
