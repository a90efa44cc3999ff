//! JSON API endpoints for external clients
//!
//! One-shot provider lookups with no coordinator state involved; the
//! debounce pipeline belongs to the interactive UI only.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::json;

use crate::server::AppState;

/// Searches the catalog once and returns matches as JSON.
///
/// `GET /api/search?q=<query>`. An empty or missing query returns an empty
/// list without touching the provider.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let query = params.get("q").map(|s| s.trim()).unwrap_or("");

    if query.is_empty() {
        return Json(json!([]));
    }

    match state.provider.search(query).await {
        Ok(results) => Json(json!(results)),
        Err(error) => {
            tracing::warn!(query, %error, "API search failed");
            Json(json!({ "error": error.to_string() }))
        }
    }
}

/// Fetches details for one title and returns them as JSON.
///
/// `GET /api/detail/{imdb_id}`
pub async fn api_detail(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> Json<serde_json::Value> {
    match state.provider.detail(&imdb_id).await {
        Ok(detail) => Json(json!(detail)),
        Err(error) => {
            tracing::warn!(imdb_id, %error, "API detail fetch failed");
            Json(json!({ "error": error.to_string() }))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use marquee_core::config::MarqueeConfig;
    use marquee_core::coordinator::spawn_search_engine;
    use marquee_core::provider::MovieProvider;
    use marquee_search::DevelopmentProvider;

    use super::*;

    fn test_state() -> AppState {
        let provider: Arc<dyn MovieProvider> = Arc::new(DevelopmentProvider::new());
        let engine = spawn_search_engine(MarqueeConfig::default(), Arc::clone(&provider));
        AppState { engine, provider }
    }

    #[tokio::test]
    async fn empty_query_returns_empty_list() {
        let Json(value) = api_search(State(test_state()), Query(HashMap::new())).await;
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn search_returns_matches_as_json() {
        let params = HashMap::from([("q".to_string(), "matrix".to_string())]);
        let Json(value) = api_search(State(test_state()), Query(params)).await;

        let results = value.as_array().expect("array of matches");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["imdb_id"], "tt0133093");
    }

    #[tokio::test]
    async fn detail_returns_fields_as_json() {
        let Json(value) = api_detail(State(test_state()), Path("tt0468569".to_string())).await;

        assert_eq!(value["title"], "The Dark Knight");
        assert_eq!(value["year"], "2008");
    }

    #[tokio::test]
    async fn unknown_detail_id_reports_error() {
        let Json(value) = api_detail(State(test_state()), Path("tt0000000".to_string())).await;
        assert!(value["error"].as_str().unwrap().contains("tt0000000"));
    }
}
