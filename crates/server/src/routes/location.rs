use axum::{Json, extract::State};
use database::services::LocationService;
use sea_orm::DatabaseConnection;

use crate::dtos::location::LocationDetailResponse;
use crate::error::ApiError;

/// List all locations with their reservations expanded
#[utoipa::path(
    get,
    path = "/locations",
    responses(
        (status = 200, description = "List of locations", body = Vec<LocationDetailResponse>)
    ),
    tag = "Locations"
)]
pub async fn get_locations(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<LocationDetailResponse>>, ApiError> {
    let locations = LocationService::list_with_reservations(&db)
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(
        locations
            .into_iter()
            .map(|(location, reservations)| LocationDetailResponse::new(location, reservations))
            .collect(),
    ))
}
