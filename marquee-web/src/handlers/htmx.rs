//! HTMX handlers for partial page updates
//!
//! Provides server-rendered HTML fragments driven by the search coordinator.
//! The input handler feeds keystrokes into the debounce pipeline; the
//! fragment handlers render whatever state the coordinator is in, so the
//! page converges on the latest state by polling.

use axum::extract::{Form, Path, State};
use axum::response::Html;
use marquee_core::coordinator::{DetailPhase, SearchPhase};
use serde::Deserialize;

use crate::components::movie;
use crate::server::AppState;

/// Form data posted on every keystroke of the search box
#[derive(Deserialize)]
pub struct SearchInputForm {
    /// Current value of the search box
    pub q: String,
}

/// Records a keystroke.
///
/// The response is empty; the results region renders from polled state once
/// the value settles in the debouncer.
pub async fn search_input(
    State(state): State<AppState>,
    Form(form): Form<SearchInputForm>,
) -> Html<String> {
    if let Err(error) = state.engine.observe(form.q).await {
        tracing::warn!(%error, "failed to observe search input");
    }
    Html(String::new())
}

/// Renders the results region for the current search phase.
pub async fn results_fragment(State(state): State<AppState>) -> Html<String> {
    let snapshot = match state.engine.current_state().await {
        Ok(snapshot) => snapshot,
        Err(error) => return Html(movie::error_banner(&error.to_string())),
    };

    let html = match snapshot.search {
        SearchPhase::Idle => movie::idle_prompt(),
        SearchPhase::Loading { .. } => movie::skeleton_grid(10),
        SearchPhase::Populated { results, .. } => movie::results_grid(&results),
        SearchPhase::Empty { query } => movie::empty_results(&query),
        SearchPhase::Failed { reason, .. } => movie::error_banner(&reason),
    };
    Html(html)
}

/// Opens the detail modal for a title and starts its detail fetch.
///
/// Returns the modal overlay immediately; its body polls
/// [`detail_fragment`] until the fetch completes.
pub async fn select_movie(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> Html<String> {
    if let Err(error) = state.engine.select_movie(imdb_id).await {
        tracing::warn!(%error, "failed to select movie");
        return Html(movie::detail_error(&error.to_string()));
    }
    Html(movie::detail_overlay())
}

/// Renders the modal body for the current detail phase.
pub async fn detail_fragment(State(state): State<AppState>) -> Html<String> {
    let snapshot = match state.engine.current_state().await {
        Ok(snapshot) => snapshot,
        Err(error) => return Html(movie::detail_error(&error.to_string())),
    };

    let html = match snapshot.detail {
        DetailPhase::Closed => String::new(),
        DetailPhase::Loading { .. } => movie::detail_loading(),
        DetailPhase::Ready { detail } => movie::detail_body(&detail),
        DetailPhase::Failed { reason, .. } => movie::detail_error(&reason),
    };
    Html(html)
}

/// Dismisses the detail modal.
pub async fn close_detail(State(state): State<AppState>) -> Html<String> {
    if let Err(error) = state.engine.close_detail().await {
        tracing::warn!(%error, "failed to close detail view");
    }
    Html(String::new())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use marquee_core::config::MarqueeConfig;
    use marquee_core::coordinator::spawn_search_engine;
    use marquee_core::provider::MovieProvider;
    use marquee_search::DevelopmentProvider;

    use super::*;

    fn test_state(provider: DevelopmentProvider) -> AppState {
        let provider: Arc<dyn MovieProvider> = Arc::new(provider);
        let engine = spawn_search_engine(MarqueeConfig::default(), Arc::clone(&provider));
        AppState { engine, provider }
    }

    /// Polls the results fragment until it contains the needle.
    async fn wait_for_fragment(state: &AppState, needle: &str) -> String {
        for _ in 0..400 {
            let Html(html) = results_fragment(State(state.clone())).await;
            if html.contains(needle) {
                return html;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        panic!("results fragment never contained {needle:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn results_region_starts_idle() {
        let state = test_state(DevelopmentProvider::new());

        let Html(html) = results_fragment(State(state)).await;
        assert!(html.contains("Type something to search"));
    }

    #[tokio::test(start_paused = true)]
    async fn typing_walks_through_skeletons_to_results() {
        let state = test_state(DevelopmentProvider::with_latency(Duration::from_secs(2)));

        search_input(
            State(state.clone()),
            Form(SearchInputForm {
                q: "matrix".to_string(),
            }),
        )
        .await;

        // The query settles after the debounce window; the provider then
        // holds the response long enough to observe the skeleton state.
        wait_for_fragment(&state, "animate-pulse").await;
        let html = wait_for_fragment(&state, "The Matrix").await;
        assert!(html.contains("/htmx/detail/select/tt0133093"));
    }

    #[tokio::test(start_paused = true)]
    async fn unmatched_query_renders_no_items_found() {
        let state = test_state(DevelopmentProvider::new());

        search_input(
            State(state.clone()),
            Form(SearchInputForm {
                q: "zzzznotreal".to_string(),
            }),
        )
        .await;

        wait_for_fragment(&state, "No items found").await;
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_box_returns_to_idle() {
        let state = test_state(DevelopmentProvider::new());

        search_input(
            State(state.clone()),
            Form(SearchInputForm {
                q: "matrix".to_string(),
            }),
        )
        .await;
        wait_for_fragment(&state, "The Matrix").await;

        search_input(
            State(state.clone()),
            Form(SearchInputForm { q: String::new() }),
        )
        .await;
        wait_for_fragment(&state, "Type something to search").await;
    }

    #[tokio::test(start_paused = true)]
    async fn selection_shows_loading_then_details() {
        let state = test_state(DevelopmentProvider::with_latency(Duration::from_secs(1)));

        let Html(overlay) =
            select_movie(State(state.clone()), Path("tt0816692".to_string())).await;
        assert!(overlay.contains("/htmx/detail/body"));

        let Html(body) = detail_fragment(State(state.clone())).await;
        assert!(body.contains("Loading"));

        // Detail resolves after the provider latency.
        tokio::time::sleep(Duration::from_secs(2)).await;
        let Html(body) = detail_fragment(State(state.clone())).await;
        assert!(body.contains("Interstellar"));
        assert!(body.contains("IMDb:"));
    }

    #[tokio::test(start_paused = true)]
    async fn closing_the_modal_empties_the_fragment() {
        let state = test_state(DevelopmentProvider::new());

        select_movie(State(state.clone()), Path("tt0816692".to_string())).await;
        close_detail(State(state.clone())).await;

        // Give the coordinator time to process both commands in order.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let Html(body) = detail_fragment(State(state)).await;
        assert!(body.is_empty());
    }
}
