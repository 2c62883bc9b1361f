use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, State},
    response::Html,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{AppState, error::AppResult, models::SearchForm, templates};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/movies", post(search))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let movies = match state.catalog.list_all().await {
        Ok(movies) => movies,
        Err(err) => {
            tracing::error!(error = %err, "failed to list movies");
            Vec::new()
        }
    };

    Html(templates::index_page(&movies))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let movies = state.catalog.search_by_name(&form.name).await?;
    tracing::debug!(query = %form.name, results = movies.len(), "search");
    Ok(Html(templates::movies_fragment(&movies)))
}
