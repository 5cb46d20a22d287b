use chrono::NaiveDate;
use database::entities::{customers, locations, reservations};
use serde::Serialize;
use utoipa::ToSchema;

use crate::dtos::customer::CustomerResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationResponse {
    pub id: i32,
    pub name: String,
    pub max_party_size: i32,
}

/// Listing profile: the location with its reservations expanded. Each nested
/// reservation carries its customer but never the location again.
#[derive(Debug, Serialize, ToSchema)]
pub struct LocationDetailResponse {
    pub id: i32,
    pub name: String,
    pub max_party_size: i32,
    pub reservations: Vec<LocationReservationResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationReservationResponse {
    pub id: i32,
    pub party_name: String,
    pub party_size: i32,
    pub reservation_date: NaiveDate,
    pub location_id: i32,
    pub customer_id: i32,
    pub customer: CustomerResponse,
}

impl From<locations::Model> for LocationResponse {
    fn from(location: locations::Model) -> Self {
        Self {
            id: location.id,
            name: location.name,
            max_party_size: location.max_party_size,
        }
    }
}

impl LocationDetailResponse {
    pub fn new(
        location: locations::Model,
        reservations: Vec<(reservations::Model, customers::Model)>,
    ) -> Self {
        Self {
            id: location.id,
            name: location.name,
            max_party_size: location.max_party_size,
            reservations: reservations
                .into_iter()
                .map(|(reservation, customer)| LocationReservationResponse {
                    id: reservation.id,
                    party_name: reservation.party_name,
                    party_size: reservation.party_size,
                    reservation_date: reservation.reservation_date,
                    location_id: reservation.location_id,
                    customer_id: reservation.customer_id,
                    customer: CustomerResponse::from(customer),
                })
                .collect(),
        }
    }
}
