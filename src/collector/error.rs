//! Error type shared by all collectors.

use std::io;

use crate::collector::procfs::parser::ParseError;

/// Error type for collection failures.
///
/// Every variant names the path or command that produced it.
#[derive(Debug)]
pub enum CollectError {
    /// A file could not be read, a directory could not be listed,
    /// or an external command failed to run.
    Io { path: String, source: io::Error },
    /// Content did not have the expected shape (field count, label block).
    Format { path: String, message: String },
    /// A numeric field could not be converted.
    Parse { path: String, message: String },
    /// The process root contained no process directories.
    NotFound { path: String },
}

impl CollectError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        CollectError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: impl Into<String>, message: impl Into<String>) -> Self {
        CollectError::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        CollectError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wraps a parser error, keeping its kind and attaching the source path.
    pub(crate) fn from_parse_error(path: impl Into<String>, err: ParseError) -> Self {
        if err.is_format() {
            CollectError::format(path, err.message)
        } else {
            CollectError::parse(path, err.message)
        }
    }

    /// Returns the path or command the error refers to.
    pub fn path(&self) -> &str {
        match self {
            CollectError::Io { path, .. }
            | CollectError::Format { path, .. }
            | CollectError::Parse { path, .. }
            | CollectError::NotFound { path } => path,
        }
    }
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io { path, source } => write!(f, "I/O error on {}: {}", path, source),
            CollectError::Format { path, message } => {
                write!(f, "incompatible format in {}: {}", path, message)
            }
            CollectError::Parse { path, message } => {
                write!(f, "parse error in {}: {}", path, message)
            }
            CollectError::NotFound { path } => write!(f, "no processes found under {}", path),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_names_path() {
        let err = CollectError::format("/proc/7/stat", "expected 52 fields, got 51");
        assert_eq!(
            err.to_string(),
            "incompatible format in /proc/7/stat: expected 52 fields, got 51"
        );
        assert_eq!(err.path(), "/proc/7/stat");
    }

    #[test]
    fn test_io_source_is_exposed() {
        let err = CollectError::io(
            "/proc/cpuinfo",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
        assert!(CollectError::NotFound { path: "/proc".into() }.source().is_none());
    }

    #[test]
    fn test_from_parse_error_keeps_kind() {
        let format = CollectError::from_parse_error("/proc/cpuinfo", ParseError::format("no colon"));
        assert!(matches!(format, CollectError::Format { .. }));

        let parse = CollectError::from_parse_error("/proc/cpuinfo", ParseError::new("invalid cpu MHz"));
        assert!(matches!(parse, CollectError::Parse { .. }));
    }
}
