use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::StoreError;

const PRAGMAS: [&str; 2] = ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"];

/// Opens the catalog database and brings its schema up to date. Safe to run on
/// every startup.
pub async fn connect_and_migrate(database_url: &str) -> Result<DatabaseConnection, StoreError> {
    let db = Database::connect(database_url).await.map_err(StoreError::StorageUnavailable)?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string()))
            .await
            .map_err(StoreError::StorageUnavailable)?;
    }

    Migrator::up(&db, None).await.map_err(StoreError::SchemaError)?;
    Ok(db)
}
