//! Password file reading.
//!
//! Turns a candidate file into the ordered password list the audit scores:
//! whole-file read, BOM stripped, lines decoded lossily (real dumps are
//! rarely clean UTF-8), surrounding whitespace trimmed, blank lines dropped.
//! Anything that survives is a valid password by definition.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use bstr::ByteSlice;

use crate::errors::AuditError;

/// UTF-8 byte order mark some Windows-exported dumps start with.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads `path` into trimmed, non-blank password lines, preserving file order.
///
/// # Errors
///
/// [`AuditError::SourceNotFound`] if the file is missing or unreadable,
/// [`AuditError::EmptyInput`] if nothing usable remains after trimming.
pub fn read_password_lines(path: &Path) -> Result<Vec<String>, AuditError> {
    let bytes = fs::read(path).map_err(|source| AuditError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut lossy = 0usize;
    let passwords: Vec<String> = content
        .lines()
        .filter_map(|line| {
            let decoded = line.to_str_lossy();
            if matches!(&decoded, Cow::Owned(_)) {
                lossy += 1;
            }
            let trimmed = decoded.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect();

    if lossy > 0 {
        log::warn!(
            "{} line(s) in {} contained invalid UTF-8 and were decoded lossily",
            lossy,
            path.display()
        );
    }

    log::debug!(
        "read {} passwords from {} ({} bytes)",
        passwords.len(),
        path.display(),
        bytes.len()
    );

    if passwords.is_empty() {
        return Err(AuditError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(passwords)
}
