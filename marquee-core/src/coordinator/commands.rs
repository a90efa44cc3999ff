//! Command definitions for the search coordinator actor.

use tokio::sync::oneshot;

use super::state::SearchSnapshot;
use crate::errors::SearchError;
use crate::types::{MovieDetails, MovieSummary};

/// Commands that can be sent to the search coordinator actor.
///
/// Commands that need an answer carry a oneshot response channel for the
/// actor to send results back on. Raw input values do not travel through
/// this channel; they enter via the debouncer and arrive at the actor
/// already settled.
pub enum SearchCommand {
    /// Open the detail view for a title and start its detail fetch.
    SelectMovie {
        imdb_id: String,
    },
    /// Dismiss the detail view.
    CloseDetail,
    /// Get a snapshot of the current search and detail state.
    GetState {
        responder: oneshot::Sender<SearchSnapshot>,
    },
    /// Shutdown the coordinator actor gracefully.
    Shutdown { responder: oneshot::Sender<()> },
}

/// Completion events re-entering the actor from spawned fetch tasks.
///
/// Each event carries the generation that was current when its fetch was
/// dispatched; the coordinator discards events whose generation is stale.
pub(super) enum FetchEvent {
    /// A search request finished.
    SearchCompleted {
        generation: u64,
        query: String,
        outcome: Result<Vec<MovieSummary>, SearchError>,
    },
    /// A detail request finished.
    DetailCompleted {
        generation: u64,
        imdb_id: String,
        outcome: Result<MovieDetails, SearchError>,
    },
}
