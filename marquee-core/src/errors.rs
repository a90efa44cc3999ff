//! Error types for movie search functionality.

use thiserror::Error;

/// Errors that can occur during movie search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search operation failed for the specified query.
    #[error("Search failed for query '{query}': {reason}")]
    SearchFailed {
        /// The search query that failed
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// Failed to fetch details for a selected title.
    #[error("Detail fetch failed for '{imdb_id}': {reason}")]
    DetailFetchFailed {
        /// The IMDb identifier whose lookup failed
        imdb_id: String,
        /// The reason for the failure
        reason: String,
    },

    /// Failed to parse a response from the catalog backend.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// The catalog backend rejected the request.
    #[error("Catalog API error: {message}")]
    ApiError {
        /// The message reported by the backend
        message: String,
    },

    /// The search coordinator actor is no longer running.
    #[error("Search engine is shut down")]
    EngineShutdown,
}
