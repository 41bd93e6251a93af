//! Error types for loading menu definitions and configuration.
//!
//! Registry reads never fail; these errors only come from the edges that
//! touch files and the environment. Messages name the offending path so
//! they can be acted on directly.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading definition files and configuration.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Definition file could not be read.
    #[error("menu definitions '{}': failed to read: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Definition file extension is not one of the supported formats.
    #[error(
        "menu definitions '{}': unsupported format, expected a .toml, .json, .yaml or .yml file",
        .path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    /// Definition content failed to parse.
    #[error("menu definitions '{source_name}': failed to parse {format}: {details}")]
    Parse {
        source_name: String,
        format: &'static str,
        details: String,
    },

    /// An environment variable held a value that could not be used.
    #[error("configuration: {var} {details}")]
    Config { var: &'static str, details: String },
}

impl MenuError {
    /// Create a read error.
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(
        source_name: impl Into<String>,
        format: &'static str,
        details: impl ToString,
    ) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            format,
            details: details.to_string(),
        }
    }
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_path() {
        let err = MenuError::read(
            "/etc/menus.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/etc/menus.toml"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn unsupported_format_lists_options() {
        let err = MenuError::UnsupportedFormat {
            path: PathBuf::from("menus.ini"),
        };
        let msg = err.to_string();
        assert!(msg.contains("menus.ini"));
        assert!(msg.contains(".toml"));
        assert!(msg.contains(".yaml"));
    }

    #[test]
    fn parse_error_names_source_and_format() {
        let err = MenuError::parse("admin", "JSON", "expected value at line 1");
        let msg = err.to_string();
        assert!(msg.contains("'admin'"));
        assert!(msg.contains("JSON"));
        assert!(msg.contains("line 1"));
    }
}
