//! Database connection and schema management.

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;
use crate::errors::AppResult;

pub mod migrations;

pub use migrations::Migrator;

/// Owned connection handle plus schema operations.
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and bring the schema up to date.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let db = Self::open(config).await?;
        Migrator::up(&db.connection, None).await?;

        tracing::info!("Database connected, schema up to date");
        Ok(db)
    }

    /// Connect without touching the schema.
    ///
    /// Migration commands use this so `status` and `down` never
    /// apply anything as a side effect.
    pub async fn open(config: &Config) -> AppResult<Self> {
        let mut options = ConnectOptions::new(&config.database_url);
        options.sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Borrow the underlying connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Apply all pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Pair every known migration with whether it has been applied.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::EntityTrait;
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        let mut status = Vec::new();
        for migration in Migrator::migrations() {
            let name = migration.name().to_string();
            let is_applied = applied.contains(&name);
            status.push((name, is_applied));
        }

        Ok(status)
    }

    /// Drop everything and re-run all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check connectivity for the health endpoint.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
