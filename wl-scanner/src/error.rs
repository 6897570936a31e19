//! Error types for the scanner pipeline
//!
//! Every fatal condition surfaces as one of these variants; the binary logs the
//! message once and exits. `OutputExists` is the only soft abort.

use std::path::PathBuf;

/// Error type for schema loading, name resolution and emission
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    /// The schema document is structurally invalid
    #[error("schema error: {0}")]
    Schema(String),

    /// The schema source could not be read
    #[error("cannot read schema from {location}: {reason}")]
    Source {
        /// Path or URL that was requested
        location: String,
        /// What went wrong
        reason: String,
    },

    /// An interface or enum reference names something never registered
    #[error("unresolved name: {0}")]
    UnresolvedName(String),

    /// A qualified enum reference is not of the form `interface.enum`
    #[error("malformed enum reference {0:?}: expected \"interface.enum\"")]
    MalformedReference(String),

    /// The output destination could not be created or written
    #[error("cannot write {}: {source}", .path.display())]
    Emission {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The destination exists and overwriting was not requested
    #[error("{} exists; pass --overwrite to replace it", .0.display())]
    OutputExists(PathBuf),

    /// Invalid generator options
    #[error("invalid option: {0}")]
    Options(String),
}

impl ScannerError {
    /// Whether the run should end successfully despite this error
    pub fn is_soft(&self) -> bool {
        matches!(self, ScannerError::OutputExists(_))
    }
}

impl From<roxmltree::Error> for ScannerError {
    fn from(e: roxmltree::Error) -> Self {
        ScannerError::Schema(e.to_string())
    }
}
