use serde::Deserialize;

use crate::validate::{self, ValidationError};

/// Payload for creating a customer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

impl NewCustomer {
    /// Checks fields in declaration order; the first failure aborts creation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty(&self.name)?;
        validate::email(&self.email)?;
        Ok(())
    }
}
