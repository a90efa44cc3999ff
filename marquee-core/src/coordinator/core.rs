//! Core state and transition logic for the search coordinator.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::commands::FetchEvent;
use super::state::{DetailPhase, SearchPhase, SearchSnapshot};
use crate::provider::MovieProvider;

/// Search coordinator state, owned by the actor task.
///
/// Reacts to settled queries and selections, dispatches provider fetches as
/// spawned tasks so the actor stays responsive, and reconciles completions
/// with the current state. Every dispatch records the generation current at
/// that moment; a completion carrying an older generation belongs to an
/// abandoned query or selection and is discarded.
pub(super) struct SearchCoordinator {
    provider: Arc<dyn MovieProvider>,
    event_tx: mpsc::UnboundedSender<FetchEvent>,
    search: SearchPhase,
    detail: DetailPhase,
    search_generation: u64,
    detail_generation: u64,
    last_dispatched: Option<String>,
}

impl SearchCoordinator {
    pub(super) fn new(
        provider: Arc<dyn MovieProvider>,
        event_tx: mpsc::UnboundedSender<FetchEvent>,
    ) -> Self {
        Self {
            provider,
            event_tx,
            search: SearchPhase::Idle,
            detail: DetailPhase::Closed,
            search_generation: 0,
            detail_generation: 0,
            last_dispatched: None,
        }
    }

    /// Handles a settled query from the debouncer.
    ///
    /// An empty (after trimming) query clears the result set without issuing
    /// a request; bumping the generation here ensures a still-in-flight
    /// search for the previous query can never repopulate the cleared state.
    pub(super) fn on_settled_query(&mut self, raw: String) {
        let query = raw.trim();

        if query.is_empty() {
            self.search_generation += 1;
            self.search = SearchPhase::Idle;
            self.last_dispatched = None;
            return;
        }

        // The debouncer suppresses consecutive duplicates, but trim variants
        // of the same query settle as distinct values and land here.
        if self.last_dispatched.as_deref() == Some(query) {
            tracing::debug!(query, "settled query unchanged, not re-dispatching");
            return;
        }

        self.search_generation += 1;
        let generation = self.search_generation;
        let query = query.to_string();
        self.last_dispatched = Some(query.clone());
        self.search = SearchPhase::Loading {
            query: query.clone(),
        };
        tracing::debug!(query, generation, "dispatching search");

        let provider = Arc::clone(&self.provider);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = provider.search(&query).await;
            let _ = event_tx.send(FetchEvent::SearchCompleted {
                generation,
                query,
                outcome,
            });
        });
    }

    /// Opens the detail view for a title and dispatches its detail fetch.
    ///
    /// The view switches to its loading state immediately; selecting another
    /// title while a fetch is in flight bumps the generation so the earlier
    /// response is discarded even if it resolves later.
    pub(super) fn select_movie(&mut self, imdb_id: String) {
        self.detail_generation += 1;
        let generation = self.detail_generation;
        self.detail = DetailPhase::Loading {
            imdb_id: imdb_id.clone(),
        };
        tracing::debug!(imdb_id, generation, "dispatching detail fetch");

        let provider = Arc::clone(&self.provider);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = provider.detail(&imdb_id).await;
            let _ = event_tx.send(FetchEvent::DetailCompleted {
                generation,
                imdb_id,
                outcome,
            });
        });
    }

    /// Dismisses the detail view.
    ///
    /// Also bumps the generation, so a response still in flight for the
    /// dismissed selection is dropped instead of reopening stale content.
    pub(super) fn close_detail(&mut self) {
        self.detail_generation += 1;
        self.detail = DetailPhase::Closed;
    }

    /// Applies a fetch completion, discarding stale generations.
    pub(super) fn on_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::SearchCompleted {
                generation,
                query,
                outcome,
            } => {
                if generation != self.search_generation {
                    tracing::debug!(query, generation, "discarding stale search response");
                    return;
                }
                self.search = match outcome {
                    Ok(results) if results.is_empty() => SearchPhase::Empty { query },
                    Ok(results) => SearchPhase::Populated { query, results },
                    Err(error) => {
                        tracing::warn!(query, %error, "search failed");
                        SearchPhase::Failed {
                            query,
                            reason: error.to_string(),
                        }
                    }
                };
            }
            FetchEvent::DetailCompleted {
                generation,
                imdb_id,
                outcome,
            } => {
                if generation != self.detail_generation {
                    tracing::debug!(imdb_id, generation, "discarding stale detail response");
                    return;
                }
                self.detail = match outcome {
                    Ok(detail) => DetailPhase::Ready { detail },
                    Err(error) => {
                        tracing::warn!(imdb_id, %error, "detail fetch failed");
                        DetailPhase::Failed {
                            imdb_id,
                            reason: error.to_string(),
                        }
                    }
                };
            }
        }
    }

    pub(super) fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            search: self.search.clone(),
            detail: self.detail.clone(),
        }
    }
}
