use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be a non-empty string")]
    EmptyString(&'static str),

    #[error("{0} must be a positive number")]
    NotPositive(&'static str),

    #[error("{0} must be a non-negative integer")]
    NotUnsigned(&'static str),
}

pub fn require_non_empty_string(
    field: &'static str,
    value: &str,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyString(field));
    }
    Ok(value.to_string())
}

pub fn require_positive_number(field: &'static str, value: i64) -> Result<u64, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(value as u64)
}

/// Digit-only parse: sign characters, whitespace and non-numeric input are
/// all rejected, unlike `u64::from_str` which tolerates a leading `+`.
pub fn require_non_negative_integer(
    field: &'static str,
    raw: &str,
) -> Result<u64, ValidationError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotUnsigned(field));
    }
    raw.parse()
        .map_err(|_| ValidationError::NotUnsigned(field))
}
