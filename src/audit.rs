//! Audit engine: occurrence counting, record building and summary tallies.
//!
//! Pure computation over an ordered password list. Reading input and writing
//! reports belong to the `input` and `report` modules. One record is produced
//! per input line, so the report mirrors the file the user supplied even when
//! the same password repeats.

use ahash::RandomState;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::blacklist::Blacklist;
use crate::classify::{classify, Strength};
use crate::entropy::{char_count, estimate_entropy};

/// Finalized result for a single input line.
///
/// Field order fixes both the CSV column order and the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordRecord {
    pub password: String,
    /// Characters, not bytes.
    pub length: usize,
    /// Bits, rounded to two decimals for reporting.
    pub entropy: f64,
    pub classification: Strength,
    /// True when the password is a known-weak literal.
    pub is_common: bool,
    /// Occurrences of this exact string across the whole input.
    pub count: usize,
}

/// Aggregate tallies for a finished audit.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditSummary {
    pub total: usize,
    pub weak: usize,
    pub moderate: usize,
    pub strong: usize,
    /// Distinct passwords seen more than once, in first-occurrence order.
    pub duplicates: Vec<String>,
}

/// Everything the report writers and the console summary need.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    pub records: Vec<PasswordRecord>,
    pub summary: AuditSummary,
}

/// Counts how often each distinct password appears.
pub fn count_occurrences(passwords: &[String]) -> HashMap<String, usize, RandomState> {
    let mut counts: HashMap<String, usize, RandomState> =
        HashMap::with_capacity_and_hasher(passwords.len(), RandomState::new());
    for password in passwords {
        *counts.entry_ref(password.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Runs the full audit over an ordered password list.
///
/// Classification always uses the raw entropy estimate; records store the
/// two-decimal rounding of the same value.
pub fn audit(passwords: &[String], blacklist: &Blacklist) -> AuditReport {
    let counts = count_occurrences(passwords);

    let mut records = Vec::with_capacity(passwords.len());
    let mut weak = 0usize;
    let mut moderate = 0usize;
    let mut strong = 0usize;
    let mut duplicates = Vec::new();
    let mut flagged: HashSet<&str, RandomState> =
        HashSet::with_capacity_and_hasher(passwords.len() / 2, RandomState::new());

    for password in passwords {
        let entropy = estimate_entropy(password);
        let length = char_count(password);
        let classification = classify(entropy, length, password, blacklist);

        match classification {
            Strength::Weak => weak += 1,
            Strength::Moderate => moderate += 1,
            Strength::Strong => strong += 1,
        }

        let count = counts[password.as_str()];
        if count > 1 && flagged.insert(password.as_str()) {
            duplicates.push(password.clone());
        }

        records.push(PasswordRecord {
            password: password.clone(),
            length,
            entropy: round2(entropy),
            classification,
            is_common: blacklist.contains(password),
            count,
        });
    }

    log::debug!(
        "audited {} passwords ({} weak / {} moderate / {} strong, {} duplicated)",
        records.len(),
        weak,
        moderate,
        strong,
        duplicates.len()
    );

    AuditReport {
        records,
        summary: AuditSummary {
            total: passwords.len(),
            weak,
            moderate,
            strong,
            duplicates,
        },
    }
}

/// Rounds to two decimals for reporting.
#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
