pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod utils;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::routes::{customer, health, location, reservation, root};

/// Builds the application router around a live database connection.
pub fn app(db: DatabaseConnection) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::root))
        .routes(routes!(health::health))
        .routes(routes!(customer::get_customers, customer::create_customer))
        .routes(routes!(customer::get_customer_by_id))
        .routes(routes!(location::get_locations))
        .routes(routes!(
            reservation::get_reservations,
            reservation::create_reservation
        ))
        .routes(routes!(
            reservation::get_reservation_by_id,
            reservation::delete_reservation
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(CompressionLayer::new())
        .with_state(db)
}
