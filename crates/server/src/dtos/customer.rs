use chrono::NaiveDate;
use database::entities::{customers, locations, reservations};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dtos::location::LocationResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Detail profile: the customer with their reservation list expanded. Each
/// nested reservation carries its location but never the customer again.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDetailResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub reservations: Vec<CustomerReservationResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerReservationResponse {
    pub id: i32,
    pub party_name: String,
    pub party_size: i32,
    pub reservation_date: NaiveDate,
    pub location_id: i32,
    pub customer_id: i32,
    pub location: LocationResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
}

impl From<CreateCustomerRequest> for models::NewCustomer {
    fn from(req: CreateCustomerRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

impl From<customers::Model> for CustomerResponse {
    fn from(customer: customers::Model) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
        }
    }
}

impl CustomerDetailResponse {
    pub fn new(
        customer: customers::Model,
        reservations: Vec<(reservations::Model, locations::Model)>,
    ) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            reservations: reservations
                .into_iter()
                .map(|(reservation, location)| CustomerReservationResponse {
                    id: reservation.id,
                    party_name: reservation.party_name,
                    party_size: reservation.party_size,
                    reservation_date: reservation.reservation_date,
                    location_id: reservation.location_id,
                    customer_id: reservation.customer_id,
                    location: LocationResponse::from(location),
                })
                .collect(),
        }
    }
}
