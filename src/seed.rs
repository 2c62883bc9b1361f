use std::path::Path;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};

use crate::{
    entities::{movie, movie_edition},
    error::StoreError,
    models::SeedMovie,
};

/// Populates an empty catalog from the JSON array at `path`, returning the
/// number of movies inserted. A catalog that already holds movies is left
/// untouched.
///
/// The whole batch is written in one transaction: if any insert fails the
/// catalog stays empty and the next startup tries again.
pub async fn seed_if_empty(db: &DatabaseConnection, path: &Path) -> Result<u64, StoreError> {
    let existing = movie::Entity::find().count(db).await.map_err(StoreError::QueryFailed)?;
    if existing > 0 {
        tracing::debug!(existing, "catalog already populated, skipping seed");
        return Ok(0);
    }

    let entries = load_seed_file(path).await?;

    let txn = db.begin().await.map_err(|e| insert_failed("transaction start", e))?;

    for entry in &entries {
        let inserted = movie::ActiveModel {
            movie_id: Default::default(),
            name: Set(entry.name.clone()),
            format: Set(entry.format().to_string()),
        }
        .insert(&txn)
        .await
        .map_err(|e| insert_failed(format!("movie {:?}", entry.name), e))?;

        if let Some(edition) = entry.edition() {
            let model = movie_edition::ActiveModel {
                movie_edition_id: Default::default(),
                movie_id: Set(inserted.movie_id),
                edition: Set(edition.to_string()),
            };
            movie_edition::Entity::insert(model).exec(&txn).await.map_err(|e| {
                insert_failed(format!("edition {edition:?} of movie {:?}", entry.name), e)
            })?;
        }
    }

    txn.commit().await.map_err(|e| insert_failed("transaction commit", e))?;

    let inserted = entries.len() as u64;
    if inserted > 0 {
        tracing::info!(movies = inserted, path = %path.display(), "seeded catalog");
    }
    Ok(inserted)
}

async fn load_seed_file(path: &Path) -> Result<Vec<SeedMovie>, StoreError> {
    let unreadable = |reason: String| StoreError::SeedDataUnreadable {
        path: path.to_path_buf(),
        reason,
    };

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| unreadable(e.to_string()))?;
    let entries: Vec<SeedMovie> =
        serde_json::from_str(&raw).map_err(|e| unreadable(e.to_string()))?;

    if let Some(index) = entries.iter().position(|m| m.name.trim().is_empty()) {
        return Err(unreadable(format!("entry {index} has an empty name")));
    }

    Ok(entries)
}

fn insert_failed(entry: impl Into<String>, source: DbErr) -> StoreError {
    StoreError::SeedInsertFailed {
        entry: entry.into(),
        source,
    }
}
