use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] DbErr),

    #[error("schema setup failed: {0}")]
    SchemaError(#[source] DbErr),

    #[error("seed data at {} unreadable: {reason}", .path.display())]
    SeedDataUnreadable { path: PathBuf, reason: String },

    #[error("seed insert failed for {entry}: {source}")]
    SeedInsertFailed {
        entry: String,
        #[source]
        source: DbErr,
    },

    #[error("query failed: {0}")]
    QueryFailed(#[source] DbErr),
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] StoreError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = crate::templates::error_fragment("Error retrieving movies");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_errors_render_a_500_fragment() {
        let err = AppError::from(StoreError::QueryFailed(DbErr::Custom("disk gone".into())));
        let message = err.to_string();
        assert!(message.starts_with("query failed"), "{message}");
        assert!(message.contains("disk gone"), "{message}");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Error retrieving movies"));
        assert!(!body.contains("disk gone"));
    }
}
