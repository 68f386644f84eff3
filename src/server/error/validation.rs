use thiserror::Error;

/// Business-rule violations in request payloads. Always a 400.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Phone must contain at least 10 digits")]
    InvalidPhone,

    #[error("Phone is already registered to another player")]
    PhoneTaken,

    #[error("Hourly rate must be a non-negative number, got {0}")]
    InvalidHourlyRate(f64),

    #[error("Amount must be a finite number, got {0}")]
    InvalidAmount(f64),
}
