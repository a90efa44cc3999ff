//! Data types for the movie search workflow.

use serde::{Deserialize, Serialize};

/// Single search match, in the order the catalog returned it.
///
/// Fields carry the catalog's values as-is; `year` stays a string because
/// the API reports series as ranges like "2019-2021". Identity key is
/// `imdb_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
}

/// Extended metadata for one selected title, fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub plot: Option<String>,
    pub rating: Option<f32>,
    pub genre: Option<String>,
    pub runtime: Option<String>,
    pub poster_url: Option<String>,
}
