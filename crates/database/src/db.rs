use sea_orm::{Database, DatabaseConnection, DbErr};

const DEFAULT_DATABASE_URL: &str = "sqlite://reservations.db?mode=rwc";

/// Creates a database connection from `DATABASE_URL`, falling back to a
/// local SQLite file when unset.
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    dotenvy::dotenv().ok();
    let url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
    Database::connect(url).await
}
