use crate::server::error::{validation::ValidationError, AppError};

/// Minimum number of digits accepted for a player's mobile number.
const MIN_PHONE_DIGITS: usize = 10;

/// Strips every non-digit character from a phone number.
///
/// # Arguments
/// - `value` - Raw phone number as typed by the user, e.g. `"(11) 98765-4321"`
///
/// # Returns
/// - `Ok(String)` - The digits only, e.g. `"11987654321"`
/// - `Err(AppError::ValidationErr(InvalidPhone))` - Fewer than 10 digits remain
pub fn parse_phone_digits(value: &str) -> Result<String, AppError> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone.into());
    }

    Ok(digits)
}
