use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use database::services::{CustomerService, LocationService, ReservationService};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use models::NewLocation;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn setup() -> (Router, DatabaseConnection) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A single pooled connection keeps every query on the same in-memory db
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    (server::app(db.clone()), db)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Locations have no creation endpoint; tests seed them through the gateway.
async fn seed_location(db: &DatabaseConnection, name: &str) -> i32 {
    LocationService::create(
        db,
        &NewLocation {
            name: name.to_owned(),
            max_party_size: 8,
        },
    )
    .await
    .unwrap()
    .id
}

async fn create_customer(app: &Router, name: &str, email: &str) -> i32 {
    let (status, body) = send(
        app,
        "POST",
        "/customers",
        Some(json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap() as i32
}

#[tokio::test]
async fn test_create_customer_appears_once_in_listing() {
    let (app, _db) = setup().await;

    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({ "name": "Ada", "email": "ada@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["reservations"], json!([]));

    let (status, body) = send(&app, "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::OK);

    let matches: Vec<&Value> = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["email"] == "ada@example.com")
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "Ada");
}

#[tokio::test]
async fn test_create_customer_rejects_email_without_at() {
    let (app, db) = setup().await;

    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({ "name": "Ada", "email": "ada.example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "400: Validation Error" }));

    // Nothing was persisted
    assert!(CustomerService::list(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_customer_rejects_empty_name() {
    let (app, db) = setup().await;

    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({ "name": "", "email": "ada@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "400: Validation Error" }));
    assert!(CustomerService::list(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_customer_rejects_malformed_body() {
    let (app, _db) = setup().await;

    let (status, body) = send(&app, "POST", "/customers", Some(json!({ "name": "Ada" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "400: Validation Error" }));
}

#[tokio::test]
async fn test_duplicate_email_keeps_one_row() {
    let (app, db) = setup().await;

    create_customer(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({ "name": "Imposter", "email": "ada@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "400: Validation Error" }));

    let customers = CustomerService::list(&db).await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Ada");
}

#[tokio::test]
async fn test_customer_detail_suppresses_nested_customer() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    let location_id = seed_location(&db, "Main").await;

    let (status, _) = send(
        &app,
        "POST",
        "/reservations",
        Some(json!({
            "reservation_date": "2024-07-04",
            "customer_id": customer_id,
            "location_id": location_id,
            "party_size": 4,
            "party_name": "Ada Party"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", &format!("/customers/{customer_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ada@example.com");

    let reservations = body["reservations"].as_array().unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0]["party_name"], "Ada Party");
    // The reservation expands its location but never the customer it came from
    assert_eq!(reservations[0]["location"]["name"], "Main");
    assert!(reservations[0].get("customer").is_none());
}

#[tokio::test]
async fn test_customer_not_found() {
    let (app, _db) = setup().await;

    let (status, body) = send(&app, "GET", "/customers/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "404: customer not found" }));

    // A non-integer id is just as much of a miss
    let (status, body) = send(&app, "GET", "/customers/ada", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "404: customer not found" }));
}

#[tokio::test]
async fn test_locations_listing_suppresses_nested_location() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    let location_id = seed_location(&db, "Main").await;

    let (status, _) = send(
        &app,
        "POST",
        "/reservations",
        Some(json!({
            "reservation_date": "2024-07-04",
            "customer_id": customer_id,
            "location_id": location_id,
            "party_size": 4,
            "party_name": "Ada Party"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/locations", None).await;
    assert_eq!(status, StatusCode::OK);

    let locations = body.as_array().unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0]["name"], "Main");
    assert_eq!(locations[0]["max_party_size"], 8);

    let reservations = locations[0]["reservations"].as_array().unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0]["customer"]["name"], "Ada");
    assert!(reservations[0].get("location").is_none());
}

#[tokio::test]
async fn test_reservation_date_round_trip() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    let location_id = seed_location(&db, "Main").await;

    let (status, body) = send(
        &app,
        "POST",
        "/reservations",
        Some(json!({
            "reservation_date": "2024-06-01",
            "customer_id": customer_id,
            "location_id": location_id,
            "party_size": 2,
            "party_name": "Dinner"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["reservation_date"], "2024-06-01");

    let id = body["id"].as_i64().unwrap();
    let (status, body) = send(&app, "GET", &format!("/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reservation_date"], "2024-06-01");
    assert_eq!(body["customer"]["email"], "ada@example.com");
    assert_eq!(body["location"]["name"], "Main");
}

#[tokio::test]
async fn test_duplicate_booking_keeps_one_row() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    let location_id = seed_location(&db, "Main").await;

    let booking = json!({
        "reservation_date": "2024-07-04",
        "customer_id": customer_id,
        "location_id": location_id,
        "party_size": 4,
        "party_name": "Ada Party"
    });

    let (status, _) = send(&app, "POST", "/reservations", Some(booking.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/reservations", Some(booking)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "400: Validation error" }));

    assert_eq!(ReservationService::list(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_same_customer_same_location_different_date_allowed() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    let location_id = seed_location(&db, "Main").await;

    for date in ["2024-07-04", "2024-07-05"] {
        let (status, _) = send(
            &app,
            "POST",
            "/reservations",
            Some(json!({
                "reservation_date": date,
                "customer_id": customer_id,
                "location_id": location_id,
                "party_size": 4,
                "party_name": "Ada Party"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{date}");
    }

    assert_eq!(ReservationService::list(&db).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_booking_unknown_customer_or_location_rejected() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    let location_id = seed_location(&db, "Main").await;

    // Dangling customer FK
    let (status, body) = send(
        &app,
        "POST",
        "/reservations",
        Some(json!({
            "reservation_date": "2024-07-04",
            "customer_id": customer_id + 41,
            "location_id": location_id,
            "party_size": 4,
            "party_name": "Ghost"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "400: Validation error" }));

    // Dangling location FK
    let (status, body) = send(
        &app,
        "POST",
        "/reservations",
        Some(json!({
            "reservation_date": "2024-07-04",
            "customer_id": customer_id,
            "location_id": location_id + 41,
            "party_size": 4,
            "party_name": "Ghost"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "400: Validation error" }));

    assert!(ReservationService::list(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_booking_rejects_malformed_input() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    let location_id = seed_location(&db, "Main").await;

    let bad_bodies = [
        // Wrong date format
        json!({
            "reservation_date": "07/04/2024",
            "customer_id": customer_id,
            "location_id": location_id,
            "party_size": 4,
            "party_name": "Ada Party"
        }),
        // Empty party name
        json!({
            "reservation_date": "2024-07-04",
            "customer_id": customer_id,
            "location_id": location_id,
            "party_size": 4,
            "party_name": ""
        }),
        // Non-integer party size
        json!({
            "reservation_date": "2024-07-04",
            "customer_id": customer_id,
            "location_id": location_id,
            "party_size": "four",
            "party_name": "Ada Party"
        }),
        // Missing customer_id
        json!({
            "reservation_date": "2024-07-04",
            "location_id": location_id,
            "party_size": 4,
            "party_name": "Ada Party"
        }),
    ];

    for body in bad_bodies {
        let (status, response) = send(&app, "POST", "/reservations", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response, json!({ "error": "400: Validation error" }), "{body}");
    }

    assert!(ReservationService::list(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_missing_reservation() {
    let (app, _db) = setup().await;

    let (status, body) = send(&app, "GET", "/reservations/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "404 not found" }));
}

#[tokio::test]
async fn test_delete_missing_reservation() {
    let (app, _db) = setup().await;

    let (status, body) = send(&app, "DELETE", "/reservations/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "404: Reservation not found" }));
}

#[tokio::test]
async fn test_full_booking_lifecycle() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    assert_eq!(customer_id, 1);

    let location_id = seed_location(&db, "Main").await;

    let (status, body) = send(
        &app,
        "POST",
        "/reservations",
        Some(json!({
            "reservation_date": "2024-07-04",
            "customer_id": customer_id,
            "location_id": location_id,
            "party_size": 4,
            "party_name": "Ada Party"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["party_name"], "Ada Party");
    assert_eq!(body["customer"]["name"], "Ada");
    assert_eq!(body["location"]["name"], "Main");

    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", "/reservations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "DELETE", &format!("/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", &format!("/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "404 not found" }));

    // The customer and location survive the cancellation
    let (status, body) = send(&app, "GET", &format!("/customers/{customer_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reservations"], json!([]));
}

#[tokio::test]
async fn test_derived_location_and_customer_views() {
    let (app, db) = setup().await;

    let customer_id = create_customer(&app, "Ada", "ada@example.com").await;
    let first = seed_location(&db, "Main").await;
    let second = seed_location(&db, "Annex").await;

    for location_id in [first, second] {
        let (status, _) = send(
            &app,
            "POST",
            "/reservations",
            Some(json!({
                "reservation_date": "2024-07-04",
                "customer_id": customer_id,
                "location_id": location_id,
                "party_size": 4,
                "party_name": "Ada Party"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (customer, _) = CustomerService::get_with_reservations(&db, customer_id)
        .await
        .unwrap()
        .unwrap();
    let visited = CustomerService::locations_for(&db, &customer).await.unwrap();
    assert_eq!(visited.len(), 2);

    let location = LocationService::get_by_id(&db, first).await.unwrap().unwrap();
    let guests = LocationService::customers_for(&db, &location).await.unwrap();
    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].email, "ada@example.com");
}
