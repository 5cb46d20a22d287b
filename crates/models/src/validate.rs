use chrono::NaiveDate;
use thiserror::Error;

/// How `reservation_date` must look on the wire. Anything else is rejected,
/// including datetimes and locale formats.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A field-level invariant failure. The variant names the failing field for
/// logs; clients only ever see the fixed per-route error body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("must have a name")]
    EmptyName,
    #[error("must be a valid email")]
    InvalidEmail,
    #[error("must have a party_name")]
    EmptyPartyName,
    #[error("must have a valid date")]
    InvalidDate,
    #[error("customer_id must exist and be an integer")]
    MissingCustomerId,
    #[error("location_id must exist and be an integer")]
    MissingLocationId,
}

pub fn non_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Parses a date-only string against the exact `YYYY-MM-DD` pattern.
pub fn reservation_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)
}

/// Generated ids start at 1, so zero can never reference a stored row.
pub fn entity_id(value: i32, missing: ValidationError) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(missing);
    }
    Ok(())
}
