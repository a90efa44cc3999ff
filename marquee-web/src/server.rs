//! HTMX + Tailwind web server for Marquee
//!
//! Serves the search page, HTMX partial-update fragments backed by the
//! search coordinator, and JSON API endpoints for external clients.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use marquee_core::config::MarqueeConfig;
use marquee_core::coordinator::{SearchEngineHandle, spawn_search_engine};
use marquee_core::provider::MovieProvider;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    api_detail, api_search, close_detail, detail_fragment, results_fragment, search_input,
    select_movie,
};
use crate::pages::search_page;

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the search coordinator actor
    pub engine: SearchEngineHandle,
    /// Provider for direct one-shot lookups from the JSON API
    pub provider: Arc<dyn MovieProvider>,
}

/// Runs the web server until the process is stopped.
///
/// Spawns the search coordinator over the given provider and serves the
/// configured bind address.
///
/// # Errors
/// Returns an error if the configured address cannot be bound.
pub async fn run_server(
    config: MarqueeConfig,
    provider: Arc<dyn MovieProvider>,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = spawn_search_engine(config.clone(), Arc::clone(&provider));

    let state = AppState { engine, provider };

    let app = Router::new()
        // Main page (HTMX + Tailwind)
        .route("/", get(search_page))
        // HTMX partial update endpoints
        .route("/htmx/search/input", post(search_input))
        .route("/htmx/search/results", get(results_fragment))
        .route("/htmx/detail/select/{imdb_id}", post(select_movie))
        .route("/htmx/detail/body", get(detail_fragment))
        .route("/htmx/detail/close", post(close_detail))
        // JSON API endpoints (for external clients)
        .route("/api/search", get(api_search))
        .route("/api/detail/{imdb_id}", get(api_detail))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let address = format!("{}:{}", config.server.bind_address, config.server.port);
    tracing::info!("Marquee server running on http://{address}");

    let listener = tokio::net::TcpListener::bind(&address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
