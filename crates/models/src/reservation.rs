use chrono::NaiveDate;
use serde::Deserialize;

use crate::validate::{self, ValidationError};

/// Payload for booking a reservation. `reservation_date` arrives as a string
/// and is only accepted in exact `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewReservation {
    pub reservation_date: String,
    pub customer_id: i32,
    pub location_id: i32,
    pub party_size: i32,
    pub party_name: String,
}

impl NewReservation {
    /// Checks fields in declaration order and returns the parsed date on
    /// success. `party_size` carries no invariant beyond being an integer.
    pub fn validate(&self) -> Result<NaiveDate, ValidationError> {
        let date = validate::reservation_date(&self.reservation_date)?;
        validate::entity_id(self.customer_id, ValidationError::MissingCustomerId)?;
        validate::entity_id(self.location_id, ValidationError::MissingLocationId)?;
        validate::non_empty(&self.party_name).map_err(|_| ValidationError::EmptyPartyName)?;
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> NewReservation {
        NewReservation {
            reservation_date: "2024-07-04".to_owned(),
            customer_id: 1,
            location_id: 1,
            party_size: 4,
            party_name: "Ada Party".to_owned(),
        }
    }

    #[test]
    fn test_valid_reservation_passes() {
        assert_eq!(
            booking().validate(),
            Ok(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap())
        );
    }

    #[test]
    fn test_malformed_date_fails() {
        let mut input = booking();
        input.reservation_date = "07/04/2024".to_owned();
        assert_eq!(input.validate(), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_zero_customer_id_fails() {
        let mut input = booking();
        input.customer_id = 0;
        assert_eq!(input.validate(), Err(ValidationError::MissingCustomerId));
    }

    #[test]
    fn test_zero_location_id_fails() {
        let mut input = booking();
        input.location_id = 0;
        assert_eq!(input.validate(), Err(ValidationError::MissingLocationId));
    }

    #[test]
    fn test_empty_party_name_fails() {
        let mut input = booking();
        input.party_name = String::new();
        assert_eq!(input.validate(), Err(ValidationError::EmptyPartyName));
    }

    #[test]
    fn test_date_checked_first() {
        // Date and ids all invalid: the date failure wins.
        let mut input = booking();
        input.reservation_date = "bad".to_owned();
        input.customer_id = 0;
        assert_eq!(input.validate(), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_party_size_not_range_checked() {
        // Matches the booking contract: no positivity or capacity check.
        let mut input = booking();
        input.party_size = -3;
        assert!(input.validate().is_ok());
    }
}
