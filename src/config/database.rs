use std::env;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::InternalError;

/// Database connection settings loaded from the environment
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://todo.db?mode=rwc".to_string());

        Self { database_url }
    }

    /// Connect to the database
    ///
    /// Does NOT run migrations - call migrate() separately.
    pub async fn connect(&self) -> Result<DatabaseConnection, InternalError> {
        let db = Database::connect(&self.database_url)
            .await
            .map_err(|e| InternalError::database("connect_database", e))?;

        tracing::debug!("Connected to database: {}", self.database_url);

        Ok(db)
    }
}

/// Run all pending migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("migrate_database", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
