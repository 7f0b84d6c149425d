//! Core logic for a checkbox-driven password generator: validate the
//! requested length, build an alphabet from the enabled character classes,
//! and sample a password from it.
//!
//! The three operations a surrounding form binds to are [`validate`],
//! [`generate`], and [`reset`]. All of them are pure; the form owns the
//! options value and the generated result.

pub mod options;
pub mod password;
pub mod validate;

pub use options::{GenerationOptions, reset};
pub use password::{
    GenerateError, GeneratedPassword, alphabet, estimate_entropy, generate, generate_with,
};
pub use validate::{
    MAX_LENGTH, MIN_LENGTH, ValidationError, ValidationResult, normalize_message, validate,
};
