use std::path::Path;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{db, entities::movie, error::StoreError, models::Movie, seed};

/// Handle to the movie catalog. Cheap to clone; every clone shares the same
/// connection pool.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    /// Opens the database, ensures the schema exists and seeds an empty
    /// catalog from `seed_path`. Seed failures are logged and leave the
    /// catalog usable.
    pub async fn initialize(database_url: &str, seed_path: &Path) -> Result<Self, StoreError> {
        let db = db::connect_and_migrate(database_url).await?;

        if let Err(err) = seed::seed_if_empty(&db, seed_path).await {
            tracing::warn!(error = %err, "could not populate catalog with initial data");
        }

        Ok(Self { db })
    }

    #[cfg(test)]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Every movie, in whatever order SQLite scans the table.
    pub async fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        let rows = movie::Entity::find().all(&self.db).await.map_err(StoreError::QueryFailed)?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Movies whose name matches `LIKE '%name%'`. An empty `name` lists the
    /// whole catalog.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Movie>, StoreError> {
        if name.is_empty() {
            return self.list_all().await;
        }

        let rows = movie::Entity::find()
            .filter(movie::Column::Name.contains(name))
            .all(&self.db)
            .await
            .map_err(StoreError::QueryFailed)?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    pub async fn close(self) {
        if let Err(err) = self.db.close().await {
            tracing::warn!(error = %err, "failed to close catalog database");
        }
    }
}
