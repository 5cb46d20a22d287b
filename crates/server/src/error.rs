use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::DataError;
use serde_json::json;

/// Per-operation failure modes. Every handler returns `Result<_, ApiError>`
/// and this enum's `IntoResponse` impl is the single place client-visible
/// status codes and bodies are produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApiError {
    /// Customer creation failed: field validation, malformed body, or the
    /// unique email constraint. All collapse to the same fixed body.
    CustomerValidation,
    CustomerNotFound,
    /// Reservation creation failed: parse, validation, duplicate
    /// (location, customer, date) triple, or dangling foreign key.
    ReservationValidation,
    ReservationNotFound,
    /// Delete of a reservation id that matched no row.
    ReservationGone,
    /// The reservation listing could not be produced.
    ReservationsUnavailable,
    /// Routes with no defined failure body fall through to a bare 500.
    Internal,
}

impl ApiError {
    pub fn internal(err: DataError) -> Self {
        log::error!("database failure: {err}");
        Self::Internal
    }

    /// Collapses any gateway failure on the customer write path into the
    /// fixed validation body; unexpected engine errors are logged first.
    pub fn customer_write(err: DataError) -> Self {
        if let DataError::Db(inner) = &err {
            log::error!("customer create failed: {inner}");
        }
        Self::CustomerValidation
    }

    pub fn customer_lookup(err: DataError) -> Self {
        log::error!("customer lookup failed: {err}");
        Self::CustomerNotFound
    }

    pub fn reservation_write(err: DataError) -> Self {
        if let DataError::Db(inner) = &err {
            log::error!("reservation create failed: {inner}");
        }
        Self::ReservationValidation
    }

    pub fn reservation_lookup(err: DataError) -> Self {
        log::error!("reservation lookup failed: {err}");
        Self::ReservationNotFound
    }

    pub fn reservation_delete(err: DataError) -> Self {
        log::error!("reservation delete failed: {err}");
        Self::ReservationGone
    }

    pub fn reservation_list(err: DataError) -> Self {
        log::error!("reservation listing failed: {err}");
        Self::ReservationsUnavailable
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::CustomerValidation => (StatusCode::BAD_REQUEST, "400: Validation Error"),
            Self::CustomerNotFound => (StatusCode::NOT_FOUND, "404: customer not found"),
            Self::ReservationValidation => (StatusCode::BAD_REQUEST, "400: Validation error"),
            Self::ReservationNotFound => (StatusCode::NOT_FOUND, "404 not found"),
            Self::ReservationGone => (StatusCode::NOT_FOUND, "404: Reservation not found"),
            Self::ReservationsUnavailable => (StatusCode::BAD_REQUEST, "400 bad request"),
            Self::Internal => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
