use serde::Deserialize;

use crate::validate::{self, ValidationError};

/// Payload for seeding a location. Locations have no creation endpoint; this
/// exists for fixtures and operational seeding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewLocation {
    pub name: String,
    /// Integer-ness is enforced by the type; non-integer JSON input never
    /// deserializes this far.
    pub max_party_size: i32,
}

impl NewLocation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty(&self.name)?;
        Ok(())
    }
}
