//! Component-wise comparison of dotted/underscored version strings.
//!
//! Identifiers like `1.5.0_10` split on `.` and `_` into the number sequence
//! `[1, 5, 0, 10]`. Comparison walks both sequences from the most significant
//! position and the first differing value decides. When every compared
//! position is equal, a minimum with strictly more components outranks the
//! running version: `1.5.0_10` demands more precision than `1.5.0` can show.
//!
//! # Doc Audit
//! - audited: 2026-08-30
//! - docs: README.md
//! - ignore: false

use std::cmp::Ordering;

use thiserror::Error;

/// Outcome of checking a running version against a required minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The running version meets or exceeds the minimum.
    Acceptable,
    /// The running version falls short of the minimum.
    Insufficient,
}

/// Errors produced while tokenizing a version string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    /// The version string was empty or whitespace-only.
    #[error("empty version string")]
    Empty,
    /// A component was not a non-negative integer.
    #[error("malformed component `{token}` in version `{version}` (components must be non-negative integers)")]
    Malformed { version: String, token: String },
}

/// Splits a version string on `.` and `_` into its numeric components.
///
/// The two delimiters are equivalent and are not retained. Every token must
/// parse as a non-negative integer; anything else (including the empty token
/// produced by `1..2` or a trailing delimiter) is rejected with an error
/// naming both the full string and the offending token.
pub fn tokenize(raw: &str) -> Result<Vec<u64>, VersionError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(VersionError::Empty);
    }

    raw.split(['.', '_'])
        .map(|token| {
            token.parse::<u64>().map_err(|_| VersionError::Malformed {
                version: raw.to_string(),
                token: token.to_string(),
            })
        })
        .collect()
}

/// Compares a running version against a minimum version.
///
/// Walks both component sequences up to the shorter length. The first
/// position where the running component exceeds the minimum decides
/// [`Verdict::Acceptable`]; the first position where it falls short decides
/// [`Verdict::Insufficient`]. Only when all compared positions are equal does
/// the trailing-length tie-break apply: a minimum with strictly more
/// components wins, otherwise the running version is acceptable.
///
/// The tie-break never overrides a decisive position. Minimum `1.5.0_9.12`
/// against running `1.5.0_10` is acceptable because 10 > 9 at position 3,
/// even though the minimum has more components.
pub fn compare(minimum: &str, running: &str) -> Result<Verdict, VersionError> {
    let min_nums = tokenize(minimum)?;
    let run_nums = tokenize(running)?;

    for (run, min) in run_nums.iter().zip(min_nums.iter()) {
        match run.cmp(min) {
            Ordering::Greater => return Ok(Verdict::Acceptable),
            Ordering::Less => return Ok(Verdict::Insufficient),
            Ordering::Equal => {}
        }
    }

    // All compared positions equal: a more specific minimum demands
    // precision the running version cannot satisfy.
    if min_nums.len() > run_nums.len() {
        Ok(Verdict::Insufficient)
    } else {
        Ok(Verdict::Acceptable)
    }
}
