//! Error types for loading and applying styles.
//!
//! [`StyleError`] is the error returned by every fallible public operation.
//! [`FetchError`] is the lower-level failure of reading a source, which load
//! operations wrap into [`StyleError::ConfigLoad`].

use std::fmt;

use thiserror::Error;

/// Which configuration collection an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Palette,
    Theme,
}

impl ConfigKind {
    fn plural(self) -> &'static str {
        match self {
            ConfigKind::Palette => "palettes",
            ConfigKind::Theme => "themes",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKind::Palette => write!(f, "palette"),
            ConfigKind::Theme => write!(f, "theme"),
        }
    }
}

/// Error type for configuration and styling operations.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The source could not be fetched or did not parse as a mapping.
    #[error("failed to load {kind}s from {source_name}: {message}")]
    ConfigLoad {
        kind: ConfigKind,
        source_name: String,
        message: String,
    },

    /// A query ran before anything was loaded into the collection.
    #[error("no {} have been loaded", .kind.plural())]
    EmptyConfig { kind: ConfigKind },

    /// Unknown palette or theme name.
    #[error("{kind} '{name}' not found. Available {}: {}", .kind.plural(), .available.join(", "))]
    NotFound {
        kind: ConfigKind,
        name: String,
        available: Vec<String>,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("type error: {0}")]
    Type(String),

    /// A color string that is not hex, a gray level, or a known name.
    #[error("invalid color '{value}': {message}")]
    InvalidColor { value: String, message: String },
}

impl StyleError {
    pub(crate) fn not_found<I, S>(kind: ConfigKind, name: &str, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StyleError::NotFound {
            kind,
            name: name.to_string(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn load(kind: ConfigKind, source: &str, message: impl fmt::Display) -> Self {
        StyleError::ConfigLoad {
            kind,
            source_name: source.to_string(),
            message: message.to_string(),
        }
    }
}

/// Failure to read a local or remote source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{0} is not valid UTF-8")]
    Utf8(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_available_names() {
        let err = StyleError::not_found(ConfigKind::Palette, "missing", ["default", "warm"]);
        let msg = err.to_string();
        assert!(msg.contains("palette 'missing' not found"));
        assert!(msg.contains("Available palettes: default, warm"));
    }

    #[test]
    fn test_empty_config_display() {
        let err = StyleError::EmptyConfig {
            kind: ConfigKind::Theme,
        };
        assert_eq!(err.to_string(), "no themes have been loaded");
    }

    #[test]
    fn test_load_error_mentions_source() {
        let err = StyleError::load(ConfigKind::Palette, "/tmp/p.yaml", "not a mapping");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/p.yaml"));
        assert!(msg.contains("not a mapping"));
        assert!(matches!(err, StyleError::ConfigLoad { .. }));
    }
}
