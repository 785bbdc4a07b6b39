//! Fatal error types for loading documents and writing reports
//!
//! Row-level anomalies are not errors: they are reported as
//! [`Diagnostic`](crate::projection::Diagnostic) values and the run continues.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for loading and reporting
pub type Result<T> = std::result::Result<T, Error>;

/// Which input document an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Monthly account snapshots (actual interest, held product)
    Snapshots,
    /// Monthly product catalogs
    Catalogs,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Snapshots => f.write_str("snapshot"),
            DocumentKind::Catalogs => f.write_str("catalog"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be opened or read
    #[error("failed to read {kind} document {}", .path.display())]
    Read {
        kind: DocumentKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the expected schema
    #[error("malformed {kind} document")]
    Parse {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write CSV report")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON report")]
    Json(#[source] serde_json::Error),

    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
