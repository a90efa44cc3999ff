//! UI-facing state for the search lifecycle.

use crate::types::{MovieDetails, MovieSummary};

/// Lifecycle of the current search.
///
/// `Idle` means nothing has been searched yet (or the query was cleared);
/// `Empty` means a search completed with zero matches. The two render
/// differently, so they are distinct states rather than one empty list.
/// Invalid combinations like "loading with stale results" are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    /// No search performed yet, or the query was cleared.
    Idle,
    /// A search request is in flight for this query.
    Loading {
        /// The trimmed query being searched
        query: String,
    },
    /// The most recent search completed with at least one match.
    Populated {
        /// The trimmed query that produced these results
        query: String,
        /// Matches in catalog response order
        results: Vec<MovieSummary>,
    },
    /// The most recent search completed with no matches.
    Empty {
        /// The trimmed query that found nothing
        query: String,
    },
    /// The most recent search failed.
    Failed {
        /// The trimmed query whose search failed
        query: String,
        /// Human-readable failure description
        reason: String,
    },
}

impl SearchPhase {
    /// True exactly while a search request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchPhase::Loading { .. })
    }
}

/// Lifecycle of the detail view for a selected title.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    /// No title selected.
    Closed,
    /// A title was selected and its detail fetch is in flight.
    Loading {
        /// IMDb id of the selected title
        imdb_id: String,
    },
    /// Details for the selected title are available.
    Ready {
        /// The fetched details
        detail: MovieDetails,
    },
    /// The detail fetch for the selected title failed.
    Failed {
        /// IMDb id of the selected title
        imdb_id: String,
        /// Human-readable failure description
        reason: String,
    },
}

/// Snapshot of coordinator state handed out for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    /// Current search lifecycle state
    pub search: SearchPhase,
    /// Current detail view state
    pub detail: DetailPhase,
}
