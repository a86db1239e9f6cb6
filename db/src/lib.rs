pub mod models;
pub mod test_utils;

use util::config;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

/// Connects to the configured database.
///
/// `DATABASE_PATH` may be a full DSN; anything else is treated as a SQLite
/// file path (parent directories are created, SQLite won't do it itself).
pub async fn connect() -> DatabaseConnection {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url
    } else {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}
