//! # Vercheck - Minimum-Version Gate
//!
//! Vercheck compares the version identifier reported by a host runtime
//! against a required minimum and answers with a verdict suitable for
//! gating a launcher script.
//!
//! ## Overview
//!
//! Version strings are sequences of non-negative integers delimited by `.`
//! or `_`, read left to right from most to least significant. The first
//! position where the two strings differ in value decides the verdict; when
//! every compared position is equal, the trailing-length tie-break applies.
//!
//! ## Modules
//!
//! - [`version`] - Tokenization, comparison, verdict and error types
//!
//! ## Example
//!
//! ```
//! use vercheck::version::{compare, Verdict};
//!
//! let verdict = compare("1.4", "1.5.0_10").unwrap();
//! assert_eq!(verdict, Verdict::Acceptable);
//! ```

pub mod version;
