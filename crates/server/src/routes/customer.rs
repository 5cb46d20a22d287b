use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use database::services::CustomerService;
use models::NewCustomer;
use sea_orm::DatabaseConnection;

use crate::dtos::customer::{CreateCustomerRequest, CustomerDetailResponse, CustomerResponse};
use crate::error::ApiError;

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "List of customers", body = Vec<CustomerResponse>)
    ),
    tag = "Customers"
)]
pub async fn get_customers(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = CustomerService::list(&db).await.map_err(ApiError::internal)?;

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerDetailResponse),
        (status = 400, description = "Validation failure or duplicate email")
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(db): State<DatabaseConnection>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerDetailResponse>), ApiError> {
    // A malformed body maps to the same fixed 400 as a field failure
    let Json(payload) = payload.map_err(|_| ApiError::CustomerValidation)?;

    let new_customer = NewCustomer::from(payload);
    new_customer
        .validate()
        .map_err(|_| ApiError::CustomerValidation)?;

    let customer = CustomerService::create(&db, &new_customer)
        .await
        .map_err(ApiError::customer_write)?;

    Ok((
        StatusCode::CREATED,
        Json(CustomerDetailResponse::new(customer, Vec::new())),
    ))
}

/// Get a customer by id, with their reservations expanded
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer id")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerDetailResponse),
        (status = 404, description = "No customer with that id")
    ),
    tag = "Customers"
)]
pub async fn get_customer_by_id(
    State(db): State<DatabaseConnection>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<CustomerDetailResponse>, ApiError> {
    // A non-integer id can never match a customer
    let Path(id) = id.map_err(|_| ApiError::CustomerNotFound)?;

    let (customer, reservations) = CustomerService::get_with_reservations(&db, id)
        .await
        .map_err(ApiError::customer_lookup)?
        .ok_or(ApiError::CustomerNotFound)?;

    Ok(Json(CustomerDetailResponse::new(customer, reservations)))
}
