//! # Password Audit
//!
//! Password-strength auditing tool for security reviews.
//!
//! ## Features
//!
//! - **Entropy scoring**: charset-coverage heuristic, `length * log2(charset)`
//! - **Tier classification**: Weak / Moderate / Strong with fixed rule precedence
//! - **Blacklist**: built-in common passwords, extensible from a file
//! - **Duplicate detection**: per-password occurrence counts plus a duplicate list
//! - **Reports**: CSV and JSON exports alongside a colored console summary
//!
//! ## Usage
//!
//! ```bash
//! # Audit a file, reports land in the current directory
//! password-audit passwords.txt
//!
//! # Reports into ./reports, with extra blacklist entries
//! password-audit passwords.txt -o ./reports --blacklist extra.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use password_audit::{audit, Blacklist};
//!
//! let passwords = vec![
//!     "abc123".to_string(),
//!     "correct-Horse7battery".to_string(),
//! ];
//! let report = audit(&passwords, &Blacklist::builtin());
//!
//! assert_eq!(report.records.len(), 2);
//! assert_eq!(report.summary.weak, 1);
//! assert_eq!(report.summary.strong, 1);
//! ```

pub mod audit;
pub mod blacklist;
pub mod classify;
pub mod cli;
pub mod console;
pub mod entropy;
pub mod errors;
pub mod input;
pub mod report;

pub use audit::{audit, AuditReport, AuditSummary, PasswordRecord};
pub use blacklist::Blacklist;
pub use classify::{classify, Strength};
pub use cli::Args;
pub use entropy::estimate_entropy;
pub use errors::AuditError;
