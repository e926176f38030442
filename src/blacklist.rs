//! Known-weak password blacklist.
//!
//! A fixed set of literals every auditor flags on sight, optionally extended
//! from a user-supplied file. Built once at startup and passed by reference;
//! it is never mutated after construction.

use std::fs;
use std::io;
use std::path::Path;

use ahash::RandomState;
use bstr::ByteSlice;
use hashbrown::HashSet;

/// Passwords flagged as common regardless of their entropy score.
const BUILTIN: [&str; 8] = [
    "123456", "password", "12345678", "qwerty", "abc123", "111111", "123123", "letmein",
];

/// Immutable set of known-weak password literals.
///
/// Matching is exact and case-sensitive: `Password` is not `password`.
#[derive(Debug, Clone)]
pub struct Blacklist {
    entries: HashSet<String, RandomState>,
}

impl Blacklist {
    /// The built-in set of common passwords.
    pub fn builtin() -> Self {
        Self::with_extra(std::iter::empty::<String>())
    }

    /// The built-in set extended with caller-supplied literals.
    pub fn with_extra<I>(extra: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut entries: HashSet<String, RandomState> =
            HashSet::with_capacity_and_hasher(BUILTIN.len(), RandomState::new());
        entries.extend(BUILTIN.iter().map(|s| s.to_string()));
        entries.extend(extra.into_iter().map(Into::into));
        Self { entries }
    }

    /// The built-in set extended with one literal per non-blank line of `path`.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let extra: Vec<String> = bytes
            .lines()
            .filter_map(|line| {
                let line = line.to_str_lossy();
                let line = line.trim();
                (!line.is_empty()).then(|| line.to_string())
            })
            .collect();

        if extra.is_empty() {
            log::warn!("blacklist file {} contained no usable entries", path.display());
        } else {
            log::debug!(
                "loaded {} extra blacklist entries from {}",
                extra.len(),
                path.display()
            );
        }

        Ok(Self::with_extra(extra))
    }

    /// Whether `password` is a known-weak literal.
    #[inline]
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    /// Number of entries, built-ins included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}
