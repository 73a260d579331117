//! # cpf-core — Validated CPF Value Type
//!
//! This crate defines [`Cpf`], a newtype for the Brazilian individual
//! taxpayer registry number (CPF — Cadastro de Pessoas Físicas). Every
//! `Cpf` in existence holds exactly 11 digits satisfying the official
//! modulo-11 checksum; an invalid CPF cannot be observed through the
//! public surface.
//!
//! ## Key Design Principles
//!
//! 1. **Validated constructor, private field.** The only public
//!    construction paths are [`Cpf::parse()`] (untrusted input) and
//!    [`Cpf::random()`] (valid by construction). No bare strings.
//!
//! 2. **Canonical storage.** The inner representation is always the
//!    unpunctuated 11-digit string. Punctuation is stripped at the
//!    boundary and re-applied only by [`Cpf::formatted()`].
//!
//! 3. **Re-validating deserialization.** `Deserialize` routes through
//!    the full parser, so a `Cpf` reconstructed from wire or storage
//!    data carries the same guarantee as one parsed locally.
//!
//! 4. **Structured rejection.** Validation failures are the
//!    [`InvalidCpf`] enum, carrying the original input and the exact
//!    reason — never a stringly-typed error.
//!
//! ## Crate Policy
//!
//! - No internal dependencies (this is a leaf crate).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O; every operation is pure or locally effectful.

mod checksum;
pub mod cpf;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use cpf::Cpf;
pub use error::InvalidCpf;
