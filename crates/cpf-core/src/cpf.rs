//! # The CPF Value Type
//!
//! [`Cpf`] wraps the canonical 11-digit string of a Brazilian taxpayer
//! registry number. The field is private; the parser and the random
//! generator are the only construction paths, so every live `Cpf`
//! satisfies the modulo-11 checksum.
//!
//! ## Validation
//!
//! [`Cpf::parse()`] normalizes (strips punctuation), then checks in
//! order: length, digit uniformity, first verifier, second verifier.
//! The order is observable — an all-equal 11-digit string reports
//! [`InvalidCpf::AllDigitsEqual`] even though it would also fail the
//! verifier checks, and when both verifiers are wrong only the first
//! is reported.
//!
//! ## Serialization
//!
//! The external representation is always the unpunctuated 11-digit
//! string. Deserialization routes through the full parser, so data
//! from the wire or storage is re-validated on the way in.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::checksum::{strip_non_digits, verifier_digit};
use crate::error::InvalidCpf;

/// A structurally valid Brazilian CPF number.
///
/// Stored in canonical form: 11 ASCII digits, no punctuation. The
/// constructor accepts both:
/// - `"12345678909"` (11 digits)
/// - `"123.456.789-09"` (formatted with dots and dash)
///
/// and in fact any mixture — every non-digit character is stripped
/// before validation.
///
/// Equality, ordering, and hashing operate on the canonical digit
/// string; ordering is the lexicographic total order consistent with
/// equality. The value is immutable and safe to share across threads.
///
/// # Construction
///
/// - [`Cpf::parse()`] — validate untrusted input, structured error.
/// - [`Cpf::try_parse()`] — same validation, `Option` result.
/// - [`Cpf::random()`] / [`Cpf::random_with()`] — valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cpf(String);

impl Cpf {
    /// Parse a CPF from a string, validating the checksum.
    ///
    /// Punctuation and any other non-digit characters are stripped
    /// first; the remaining digits must number exactly 11, must not all
    /// be equal, and must carry the two correct verifier digits.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCpf`] naming the first check that failed. The
    /// error carries `input` verbatim, before normalization.
    pub fn parse(input: &str) -> Result<Self, InvalidCpf> {
        let digits = strip_non_digits(input);
        if digits.len() != 11 {
            return Err(InvalidCpf::WrongLength {
                input: input.to_string(),
            });
        }

        let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        if values.iter().all(|&d| d == values[0]) {
            return Err(InvalidCpf::AllDigitsEqual {
                input: input.to_string(),
            });
        }

        let v1 = verifier_digit(&values[..9]);
        if v1 != values[9] {
            return Err(InvalidCpf::FirstVerifier {
                input: input.to_string(),
                expected: v1,
            });
        }

        let v2 = verifier_digit(&values[..10]);
        if v2 != values[10] {
            return Err(InvalidCpf::SecondVerifier {
                input: input.to_string(),
                expected: v2,
            });
        }

        Ok(Self(digits))
    }

    /// Parse a CPF, discarding the rejection reason.
    ///
    /// Same validation as [`Cpf::parse()`], different result channel:
    /// callers that only need valid-or-not get an `Option` without an
    /// error to route.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Generate a random structurally valid CPF using [`rand::thread_rng()`].
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Generate a random structurally valid CPF from a caller-supplied
    /// randomness source.
    ///
    /// Draws 9 uniform digits and appends the two verifier digits, so
    /// the result is valid by construction and skips the parser. Pass a
    /// seeded generator (e.g. `StdRng::seed_from_u64`) for
    /// deterministic output in tests.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        let mut digits = [0u8; 11];
        loop {
            for d in &mut digits[..9] {
                *d = rng.gen_range(0..=9);
            }
            // A repdigit prefix checksums to a repdigit CPF, which the
            // parser rejects. Redraw in that case.
            if digits[1..9].iter().any(|&d| d != digits[0]) {
                break;
            }
        }
        digits[9] = verifier_digit(&digits[..9]);
        digits[10] = verifier_digit(&digits[..10]);
        Self(digits.iter().map(|&d| char::from(b'0' + d)).collect())
    }

    /// Access the CPF in canonical 11-digit form (no punctuation).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in formatted form: `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = InvalidCpf;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = InvalidCpf;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

/// Deserializes as a plain `String`, then routes through [`Cpf::parse()`]
/// so that invalid values are rejected at deserialization time — not
/// silently accepted.
impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
