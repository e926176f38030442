//! Tier classification for audited passwords.
//!
//! Maps an entropy estimate, a length and the raw string onto one of three
//! tiers. Rules are evaluated in fixed precedence order and the first match
//! wins, so every input lands on exactly one tier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::blacklist::Blacklist;

/// Passwords shorter than this are Weak regardless of entropy.
pub const WEAK_LENGTH_FLOOR: usize = 6;
/// Entropy below this many bits is Weak.
pub const WEAK_ENTROPY_FLOOR: f64 = 28.0;
/// Entropy below this many bits caps the tier at Moderate.
pub const STRONG_ENTROPY_FLOOR: f64 = 50.0;
/// Lengths below this cap the tier at Moderate.
pub const STRONG_LENGTH_FLOOR: usize = 10;

/// Strength tier assigned to each audited password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Tier name as it appears in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a password given its unrounded entropy estimate and length.
///
/// Blacklist membership, the minimum length and the weak entropy floor all
/// force `Weak`; the strong floors then separate `Moderate` from `Strong`.
/// Threshold comparisons are strict, so a password sitting exactly on a
/// floor clears it.
pub fn classify(entropy: f64, length: usize, password: &str, blacklist: &Blacklist) -> Strength {
    if blacklist.contains(password) || length < WEAK_LENGTH_FLOOR || entropy < WEAK_ENTROPY_FLOOR {
        return Strength::Weak;
    }
    if entropy < STRONG_ENTROPY_FLOOR || length < STRONG_LENGTH_FLOOR {
        return Strength::Moderate;
    }
    Strength::Strong
}
