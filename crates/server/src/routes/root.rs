use axum::http::StatusCode;

/// Bare root probe; returns an empty body
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", content_type = "text/plain", body = String)
    ),
    tag = ""
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, "")
}
