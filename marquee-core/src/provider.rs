//! Catalog provider seam for movie lookups.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{MovieDetails, MovieSummary};

/// Trait for movie catalog providers.
///
/// Implementations provide title search and per-title detail lookups through
/// different backends (the OMDb API, canned development data, mock providers
/// for testing).
#[async_trait]
pub trait MovieProvider: Send + Sync + std::fmt::Debug {
    /// Search the catalog for titles matching the query.
    ///
    /// Result order follows the backend's response order.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - Search operation failed
    /// - `SearchError::ParseError` - Response could not be decoded
    /// - `SearchError::ApiError` - Backend rejected the request
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SearchError>;

    /// Fetch extended details for a single title by IMDb id.
    ///
    /// # Errors
    /// - `SearchError::DetailFetchFailed` - Lookup failed or title unknown
    /// - `SearchError::ParseError` - Response could not be decoded
    async fn detail(&self, imdb_id: &str) -> Result<MovieDetails, SearchError>;
}
