use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::group::GroupService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Rewrites stored groups whose rosters are inconsistent.
///
/// Runs once before the server accepts requests so every group served afterwards has its
/// owner among the admins, no duplicate ids and no member left in the pending list.
pub async fn align_group_invariants(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let aligned = GroupService::new(db).align_all().await?;

    if aligned > 0 {
        tracing::info!("Aligned rosters of {} groups", aligned);
    }

    Ok(())
}

/// Builds the CORS layer from configuration.
///
/// With `CORS_ALLOWED_ORIGIN` set only that origin is allowed; otherwise any origin is.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = match &config.cors_allowed_origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGIN".to_string(),
                reason: e.to_string(),
            })?;
            AllowOrigin::exact(value)
        }
        None => {
            tracing::warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
            AllowOrigin::any()
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
