//! Mock provider for coordinator tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::provider::MovieProvider;
use crate::types::{MovieDetails, MovieSummary};

/// Scripted provider with controllable latency for coordinator tests.
///
/// Latencies are simulated with `tokio::time::sleep`, so tests running with
/// paused time can interleave responses deterministically.
#[derive(Debug, Default)]
pub(super) struct MockProvider {
    catalog: Vec<MovieSummary>,
    details: HashMap<String, MovieDetails>,
    search_latency: Duration,
    detail_latency: HashMap<String, Duration>,
    fail_searches: bool,
    search_calls: Arc<AtomicUsize>,
}

impl MockProvider {
    pub(super) fn new(catalog: Vec<MovieSummary>) -> Self {
        let details = catalog
            .iter()
            .map(|summary| (summary.imdb_id.clone(), details_for(summary)))
            .collect();
        Self {
            catalog,
            details,
            ..Self::default()
        }
    }

    pub(super) fn with_search_latency(mut self, latency: Duration) -> Self {
        self.search_latency = latency;
        self
    }

    pub(super) fn with_detail_latency(mut self, imdb_id: &str, latency: Duration) -> Self {
        self.detail_latency.insert(imdb_id.to_string(), latency);
        self
    }

    pub(super) fn failing(mut self) -> Self {
        self.fail_searches = true;
        self
    }

    /// Shared counter of search dispatches reaching this provider.
    pub(super) fn search_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.search_calls)
    }
}

#[async_trait]
impl MovieProvider for MockProvider {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SearchError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.search_latency).await;

        if self.fail_searches {
            return Err(SearchError::SearchFailed {
                query: query.to_string(),
                reason: "scripted failure".to_string(),
            });
        }

        let needle = query.to_lowercase();
        Ok(self
            .catalog
            .iter()
            .filter(|summary| summary.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn detail(&self, imdb_id: &str) -> Result<MovieDetails, SearchError> {
        let latency = self
            .detail_latency
            .get(imdb_id)
            .copied()
            .unwrap_or(Duration::ZERO);
        tokio::time::sleep(latency).await;

        self.details
            .get(imdb_id)
            .cloned()
            .ok_or_else(|| SearchError::DetailFetchFailed {
                imdb_id: imdb_id.to_string(),
                reason: "unknown title".to_string(),
            })
    }
}

/// Builds a summary entry for test catalogs.
pub(super) fn summary(imdb_id: &str, title: &str, year: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster_url: None,
    }
}

fn details_for(summary: &MovieSummary) -> MovieDetails {
    MovieDetails {
        imdb_id: summary.imdb_id.clone(),
        title: summary.title.clone(),
        year: summary.year.clone(),
        plot: Some(format!("Plot of {}", summary.title)),
        rating: Some(7.5),
        genre: Some("Action".to_string()),
        runtime: Some("120 min".to_string()),
        poster_url: summary.poster_url.clone(),
    }
}
