use std::fmt;

use log::debug;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::options::GenerationOptions;

// Class strings, concatenated in this fixed order when enabled.
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Every class toggle is off, leaving nothing to sample from.
    #[error("no character classes enabled")]
    EmptyAlphabet,
    /// The options carry no validated length.
    #[error("no password length set")]
    NoLength,
}

/// A generated password. Wiped from memory on drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the sampling pool from the enabled classes, in fixed order:
/// lowercase, uppercase, numbers, symbols. Duplicates are kept as-is.
pub fn alphabet(options: &GenerationOptions) -> String {
    let mut pool = String::new();
    if options.include_lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.include_uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.include_numbers {
        pool.push_str(NUMBERS);
    }
    if options.include_symbols {
        pool.push_str(SYMBOLS);
    }
    pool
}

/// Generates a password using the thread-local RNG.
pub fn generate(options: &GenerationOptions) -> Result<GeneratedPassword, GenerateError> {
    generate_with(options, &mut rand::rng())
}

/// Samples `length` characters with replacement, each at a uniformly random
/// index into the alphabet. Generic over the RNG so callers can seed one for
/// reproducible output.
pub fn generate_with<R: Rng>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerateError> {
    let pool: Vec<char> = alphabet(options).chars().collect();
    if pool.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }
    let length = options.length.ok_or(GenerateError::NoLength)?;

    debug!("sampling {length} chars from a {}-char alphabet", pool.len());

    let password = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..pool.len());
            pool[idx]
        })
        .collect();

    Ok(GeneratedPassword(password))
}

/// Rough strength estimate in bits: log2 of the observed character space,
/// times the password length. Zero for the empty string.
pub fn estimate_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut char_space = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        char_space += LOWERCASE.len();
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        char_space += UPPERCASE.len();
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        char_space += NUMBERS.len();
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        char_space += SYMBOLS.len();
    }
    if char_space == 0 {
        char_space = 2;
    }

    let length = password.chars().count() as f64;
    length * (char_space as f64).log2()
}
