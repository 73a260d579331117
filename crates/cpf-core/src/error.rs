//! # Error Types — CPF Validation Rejections
//!
//! Defines [`InvalidCpf`], the structured rejection type for CPF
//! validation. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - Every variant carries the original (pre-normalization) input, so
//!   messages show what the caller actually typed — never the stripped
//!   digit string.
//! - Verifier mismatches additionally carry the expected digit.
//! - These are validation errors, not resource or system errors; no
//!   retry is meaningful.

use thiserror::Error;

/// Reason a string was rejected as a CPF.
///
/// The checks run in a fixed order (length, then uniformity, then first
/// verifier, then second verifier) and short-circuit, so exactly one
/// variant is ever produced for a given input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCpf {
    /// The input does not normalize to exactly 11 digits.
    #[error("Invalid CPF '{input}': must contain exactly 11 digits")]
    WrongLength {
        /// The raw input as supplied by the caller.
        input: String,
    },

    /// All 11 digits are identical (e.g. `111.111.111-11`). Such
    /// sequences satisfy the checksum but are never issued.
    #[error("Invalid CPF '{input}': all digits are equal")]
    AllDigitsEqual {
        /// The raw input as supplied by the caller.
        input: String,
    },

    /// The 10th digit does not match the checksum of the first nine.
    #[error("Invalid CPF '{input}': first verifier digit should be {expected}")]
    FirstVerifier {
        /// The raw input as supplied by the caller.
        input: String,
        /// The verifier digit the checksum requires.
        expected: u8,
    },

    /// The 11th digit does not match the checksum of the first ten.
    #[error("Invalid CPF '{input}': second verifier digit should be {expected}")]
    SecondVerifier {
        /// The raw input as supplied by the caller.
        input: String,
        /// The verifier digit the checksum requires.
        expected: u8,
    },
}

impl InvalidCpf {
    /// The offending raw input, exactly as supplied.
    pub fn input(&self) -> &str {
        match self {
            Self::WrongLength { input }
            | Self::AllDigitsEqual { input }
            | Self::FirstVerifier { input, .. }
            | Self::SecondVerifier { input, .. } => input,
        }
    }
}
