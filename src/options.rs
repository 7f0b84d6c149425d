use serde::{Deserialize, Serialize};

/// Character-class toggles and requested length for one generation request.
///
/// The surrounding form rebuilds this from its current checkbox state on
/// every submit; `length` stays `None` until a validated length is filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub length: Option<usize>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_lowercase: true,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            length: None,
        }
    }
}

impl GenerationOptions {
    /// Returns a copy with the validated length filled in.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}

/// Canonical default state for the form's reset action: lowercase enabled,
/// everything else off, no length. The caller drops any held password and
/// generated-flag when applying it.
pub fn reset() -> GenerationOptions {
    GenerationOptions::default()
}
