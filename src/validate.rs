use thiserror::Error;

/// Inclusive bounds on the requested password length.
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 16;

pub type ValidationResult = Result<usize, ValidationError>;

/// Why a requested length was rejected. Display text is the user-facing
/// message the form shows next to the length field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Length is Required")]
    Required,
    #[error("Should be a Number")]
    NotANumber,
    #[error("Should be min of {} characters", MIN_LENGTH)]
    TooShort,
    #[error("Should be max of {} characters", MAX_LENGTH)]
    TooLong,
}

/// Checks the raw length text from the form. Pure; no side effects.
pub fn validate(raw_length: &str) -> ValidationResult {
    let raw = raw_length.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required);
    }
    let length: i64 = raw.parse().map_err(|_| ValidationError::NotANumber)?;
    if length < MIN_LENGTH as i64 {
        return Err(ValidationError::TooShort);
    }
    if length > MAX_LENGTH as i64 {
        return Err(ValidationError::TooLong);
    }
    Ok(length as usize)
}

/// Some form libraries report a failed numeric cast as a long "NaN" message
/// quoting the raw input. Collapse exactly that message into the canonical
/// not-a-number text; anything else passes through untouched.
pub fn normalize_message<'a>(message: &'a str, raw_length: &str) -> &'a str {
    let cast_message = format!(
        "passwordLength must be a `number` type, \
         but the final value was: `NaN` (cast from the value `\"{raw_length}\"`)."
    );
    if message == cast_message {
        "Should be a Number"
    } else {
        message
    }
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_boundaries() {
        assert_eq!(validate("7"), Err(ValidationError::TooShort));
        assert_eq!(validate("8"), Ok(8));
        assert_eq!(validate("16"), Ok(16));
        assert_eq!(validate("17"), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_validate_empty_is_required() {
        assert_eq!(validate(""), Err(ValidationError::Required));
        assert_eq!(validate("   "), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_non_numeric() {
        assert_eq!(validate("abc"), Err(ValidationError::NotANumber));
        assert_eq!(validate("12.5"), Err(ValidationError::NotANumber));
        assert_eq!(validate("12abc"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_validate_negative_is_too_short() {
        assert_eq!(validate("-3"), Err(ValidationError::TooShort));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Should be min of 8 characters"
        );
        assert_eq!(
            ValidationError::TooLong.to_string(),
            "Should be max of 16 characters"
        );
    }

    #[test]
    fn test_normalize_nan_cast_message() {
        let message = "passwordLength must be a `number` type, \
                       but the final value was: `NaN` (cast from the value `\"abc\"`).";
        assert_eq!(normalize_message(message, "abc"), "Should be a Number");
    }

    #[test]
    fn test_normalize_passes_other_messages_through() {
        assert_eq!(
            normalize_message("Should be min of 8 characters", "7"),
            "Should be min of 8 characters"
        );
    }
}
