use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Customers", description = "Customer related endpoints"),
        (name = "Locations", description = "Location related endpoints"),
        (name = "Reservations", description = "Reservation booking endpoints"),
    ),
    info(
        title = "Reservations API",
        version = "1.0.0",
        description = "Reservation booking backend",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
