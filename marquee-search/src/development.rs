//! Canned catalog provider for offline development.

use std::time::Duration;

use async_trait::async_trait;

use marquee_core::errors::SearchError;
use marquee_core::provider::MovieProvider;
use marquee_core::types::{MovieDetails, MovieSummary};

/// Development provider returning a small built-in catalog.
///
/// Lets the complete search workflow run without network access or an API
/// key. An optional artificial latency makes the loading states visible
/// while working on the UI.
#[derive(Debug, Clone)]
pub struct DevelopmentProvider {
    catalog: Vec<MovieDetails>,
    latency: Duration,
}

impl DevelopmentProvider {
    /// Creates a provider over the built-in catalog with no latency.
    pub fn new() -> Self {
        Self {
            catalog: builtin_catalog(),
            latency: Duration::ZERO,
        }
    }

    /// Creates a provider that delays every response by `latency`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            catalog: builtin_catalog(),
            latency,
        }
    }
}

impl Default for DevelopmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieProvider for DevelopmentProvider {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SearchError> {
        tokio::time::sleep(self.latency).await;

        let needle = query.to_lowercase();
        Ok(self
            .catalog
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .map(|movie| MovieSummary {
                imdb_id: movie.imdb_id.clone(),
                title: movie.title.clone(),
                year: movie.year.clone(),
                poster_url: movie.poster_url.clone(),
            })
            .collect())
    }

    async fn detail(&self, imdb_id: &str) -> Result<MovieDetails, SearchError> {
        tokio::time::sleep(self.latency).await;

        self.catalog
            .iter()
            .find(|movie| movie.imdb_id == imdb_id)
            .cloned()
            .ok_or_else(|| SearchError::DetailFetchFailed {
                imdb_id: imdb_id.to_string(),
                reason: "not in the development catalog".to_string(),
            })
    }
}

fn builtin_catalog() -> Vec<MovieDetails> {
    vec![
        entry(
            "tt0133093",
            "The Matrix",
            "1999",
            "A computer hacker learns from mysterious rebels about the true \
             nature of his reality and his role in the war against its \
             controllers.",
            8.7,
            "Action, Sci-Fi",
            "136 min",
        ),
        entry(
            "tt1375666",
            "Inception",
            "2010",
            "A thief who steals corporate secrets through dream-sharing \
             technology is given the inverse task of planting an idea into \
             the mind of a C.E.O.",
            8.8,
            "Action, Adventure, Sci-Fi",
            "148 min",
        ),
        entry(
            "tt0816692",
            "Interstellar",
            "2014",
            "A team of explorers travel through a wormhole in space in an \
             attempt to ensure humanity's survival.",
            8.7,
            "Adventure, Drama, Sci-Fi",
            "169 min",
        ),
        entry(
            "tt0468569",
            "The Dark Knight",
            "2008",
            "When the menace known as the Joker wreaks havoc on the people \
             of Gotham, Batman must accept one of the greatest psychological \
             and physical tests of his ability to fight injustice.",
            9.0,
            "Action, Crime, Drama",
            "152 min",
        ),
        entry(
            "tt1856101",
            "Blade Runner 2049",
            "2017",
            "Young Blade Runner K's discovery of a long-buried secret leads \
             him to track down former Blade Runner Rick Deckard, who's been \
             missing for thirty years.",
            8.0,
            "Action, Drama, Mystery",
            "164 min",
        ),
        entry(
            "tt0078748",
            "Alien",
            "1979",
            "The crew of a commercial spacecraft encounters a deadly \
             lifeform after investigating a mysterious transmission of \
             unknown origin.",
            8.5,
            "Horror, Sci-Fi",
            "117 min",
        ),
    ]
}

fn entry(
    imdb_id: &str,
    title: &str,
    year: &str,
    plot: &str,
    rating: f32,
    genre: &str,
    runtime: &str,
) -> MovieDetails {
    MovieDetails {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        plot: Some(plot.to_string()),
        rating: Some(rating),
        genre: Some(genre.to_string()),
        runtime: Some(runtime.to_string()),
        poster_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let provider = DevelopmentProvider::new();
        let results = provider.search("MATRIX").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].imdb_id, "tt0133093");
    }

    #[tokio::test]
    async fn search_with_no_match_is_empty() {
        let provider = DevelopmentProvider::new();
        assert!(provider.search("zzzznotreal").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn detail_round_trips_catalog_entry() {
        let provider = DevelopmentProvider::new();
        let detail = provider.detail("tt0816692").await.unwrap();

        assert_eq!(detail.title, "Interstellar");
        assert!(detail.plot.is_some());
    }

    #[tokio::test]
    async fn detail_for_unknown_id_fails() {
        let provider = DevelopmentProvider::new();
        let error = provider.detail("tt0000000").await.unwrap_err();

        assert!(matches!(error, SearchError::DetailFetchFailed { .. }));
    }
}
