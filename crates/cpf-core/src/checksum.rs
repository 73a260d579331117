//! # CPF Checksum Primitives
//!
//! The two pure building blocks of CPF validation: the modulo-11
//! verifier-digit computation and the digit-stripping normalizer.
//! Both are total functions with no failure mode; the parser in
//! [`crate::cpf`] composes them and owns the error taxonomy.

/// Compute one CPF verifier digit from an ordered digit sequence.
///
/// Callers pass the first 9 digits to obtain the first verifier digit,
/// then those 9 plus the first verifier to obtain the second. For a
/// sequence of `n` digits, position `i` is weighted by `n + 1 - i`
/// (leftmost heaviest, rightmost weight 2). The weighted sum is reduced
/// modulo 11; remainders below 2 map to 0, anything else to
/// `11 - remainder`.
pub(crate) fn verifier_digit(digits: &[u8]) -> u8 {
    let weight = digits.len() + 1;
    let sum: usize = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| usize::from(d) * (weight - i))
        .sum();
    let rest = sum % 11;
    if rest < 2 {
        0
    } else {
        (11 - rest) as u8
    }
}

/// Strip every character that is not an ASCII digit, preserving order.
///
/// Empty input yields empty output. Non-ASCII digits (e.g. Arabic-Indic
/// numerals) are stripped, not converted.
pub(crate) fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
