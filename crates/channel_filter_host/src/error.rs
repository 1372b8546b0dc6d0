// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host error type.

use channel_filter::FilterError;
use std::path::PathBuf;

/// Error raised by the host: file access, parsing, or unresolvable clicks
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A RON file could not be parsed
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: ron::error::SpannedError,
    },

    /// A scene object is stored under a key other than its name
    #[error("Scene object {name:?} is stored under {key:?}")]
    ObjectName {
        /// Map key
        key: String,
        /// Name recorded on the object
        name: String,
    },

    /// RON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] ron::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A click script line is malformed
    #[error("Script line {line}: {message}")]
    Script {
        /// 1-based line number
        line: usize,
        /// What is wrong with it
        message: String,
    },

    /// A click script line names something the profile does not know
    #[error("Script line {line}: {source}")]
    ScriptAction {
        /// 1-based line number
        line: usize,
        /// Resolution error
        #[source]
        source: FilterError,
    },

    /// Filter vocabulary error
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

impl HostError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a RON parse error with the path it concerns
    pub fn parse(path: impl Into<PathBuf>, source: ron::error::SpannedError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
