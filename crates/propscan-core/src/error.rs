/// Error type shared by every fallible operation in the core crate.
///
/// Property-query failures are deliberately absent: a query that cannot run
/// is reported as "property not set" by the store itself.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// A filesystem operation on `path` failed.
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory walker could not read an entry or directory.
    #[error("directory walk failed: {0}")]
    Walk(#[from] jwalk::Error),

    /// The configuration file exists but could not be parsed.
    #[error("invalid configuration file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing a report line to the output sink failed.
    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),
}

impl ScanError {
    /// Wrap an I/O error with the action and path it came from.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
