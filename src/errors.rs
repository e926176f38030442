//! Custom error types for the password-audit library.

use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort an audit run.
///
/// Both variants are fatal: a run either completes with a full report or
/// stops here with a non-zero exit. There is no per-line failure mode, since
/// any non-blank text is a valid password by this tool's definition.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuditError {
    /// The input path does not exist or could not be read.
    #[error("password file not found or unreadable: {}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input resolved but contained no non-blank lines.
    #[error("no passwords found in {}", .path.display())]
    EmptyInput { path: PathBuf },
}
