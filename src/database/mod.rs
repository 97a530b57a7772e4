pub mod connection;
pub mod entities;
pub mod migrations;

pub use connection::*;

use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Run all pending migrations. Used by the server on startup and by tests.
pub async fn setup_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    migrations::Migrator::up(db, None).await
}
