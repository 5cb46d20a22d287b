use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use database::services::ReservationService;
use models::NewReservation;
use sea_orm::DatabaseConnection;

use crate::dtos::reservation::{CreateReservationRequest, ReservationResponse};
use crate::error::ApiError;

/// List all reservations with customer and location expanded
#[utoipa::path(
    get,
    path = "/reservations",
    responses(
        (status = 200, description = "List of reservations", body = Vec<ReservationResponse>),
        (status = 400, description = "Listing could not be produced")
    ),
    tag = "Reservations"
)]
pub async fn get_reservations(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let reservations = ReservationService::list(&db)
        .await
        .map_err(ApiError::reservation_list)?;

    Ok(Json(
        reservations
            .into_iter()
            .map(|(reservation, customer, location)| {
                ReservationResponse::new(reservation, customer, location)
            })
            .collect(),
    ))
}

/// Book a reservation
#[utoipa::path(
    post,
    path = "/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Validation failure, duplicate booking, or unknown customer/location")
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(db): State<DatabaseConnection>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    // A malformed body maps to the same fixed 400 as a field failure
    let Json(payload) = payload.map_err(|_| ApiError::ReservationValidation)?;

    let new_reservation = NewReservation::from(payload);
    let reservation_date = new_reservation
        .validate()
        .map_err(|_| ApiError::ReservationValidation)?;

    let reservation = ReservationService::create(&db, reservation_date, &new_reservation)
        .await
        .map_err(ApiError::reservation_write)?;

    // Re-read to expand the customer and location sides of the new row
    let (reservation, customer, location) = ReservationService::get_by_id(&db, reservation.id)
        .await
        .map_err(ApiError::reservation_write)?
        .ok_or(ApiError::ReservationValidation)?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationResponse::new(reservation, customer, location)),
    ))
}

/// Get a reservation by id
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    params(
        ("id" = i32, Path, description = "Reservation id")
    ),
    responses(
        (status = 200, description = "Reservation found", body = ReservationResponse),
        (status = 404, description = "No reservation with that id")
    ),
    tag = "Reservations"
)]
pub async fn get_reservation_by_id(
    State(db): State<DatabaseConnection>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ReservationResponse>, ApiError> {
    // A non-integer id can never match a reservation
    let Path(id) = id.map_err(|_| ApiError::ReservationNotFound)?;

    let (reservation, customer, location) = ReservationService::get_by_id(&db, id)
        .await
        .map_err(ApiError::reservation_lookup)?
        .ok_or(ApiError::ReservationNotFound)?;

    Ok(Json(ReservationResponse::new(reservation, customer, location)))
}

/// Cancel a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    params(
        ("id" = i32, Path, description = "Reservation id")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "No reservation with that id")
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(db): State<DatabaseConnection>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::ReservationGone)?;

    let deleted = ReservationService::delete_by_id(&db, id)
        .await
        .map_err(ApiError::reservation_delete)?;

    if !deleted {
        return Err(ApiError::ReservationGone);
    }

    Ok(StatusCode::NO_CONTENT)
}
