use chrono::NaiveDate;
use database::entities::{customers, locations, reservations};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dtos::customer::CustomerResponse;
use crate::dtos::location::LocationResponse;

/// Full reservation profile: customer and location expanded flat, without
/// their own reservation collections.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i32,
    pub party_name: String,
    pub party_size: i32,
    pub reservation_date: NaiveDate,
    pub location_id: i32,
    pub customer_id: i32,
    pub customer: CustomerResponse,
    pub location: LocationResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    /// Date-only string, exact `YYYY-MM-DD`
    pub reservation_date: String,
    pub customer_id: i32,
    pub location_id: i32,
    pub party_size: i32,
    pub party_name: String,
}

impl From<CreateReservationRequest> for models::NewReservation {
    fn from(req: CreateReservationRequest) -> Self {
        Self {
            reservation_date: req.reservation_date,
            customer_id: req.customer_id,
            location_id: req.location_id,
            party_size: req.party_size,
            party_name: req.party_name,
        }
    }
}

impl ReservationResponse {
    pub fn new(
        reservation: reservations::Model,
        customer: customers::Model,
        location: locations::Model,
    ) -> Self {
        Self {
            id: reservation.id,
            party_name: reservation.party_name,
            party_size: reservation.party_size,
            reservation_date: reservation.reservation_date,
            location_id: reservation.location_id,
            customer_id: reservation.customer_id,
            customer: CustomerResponse::from(customer),
            location: LocationResponse::from(location),
        }
    }
}
