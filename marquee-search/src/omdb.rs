//! Movie catalog provider backed by the OMDb API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use marquee_core::config::OmdbConfig;
use marquee_core::errors::SearchError;
use marquee_core::provider::MovieProvider;
use marquee_core::types::{MovieDetails, MovieSummary};

/// OMDb-backed movie catalog provider.
///
/// Issues `s=` searches and `i=` detail lookups against the configured
/// endpoint. The API key and base URL come from [`OmdbConfig`]; the free
/// tier works without a key.
#[derive(Debug, Clone)]
pub struct OmdbProvider {
    client: reqwest::Client,
    config: OmdbConfig,
}

/// Response from OMDb for a title search (`s=` queries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbSearchResponse {
    /// Page of matches; absent when nothing matched
    #[serde(rename = "Search")]
    pub search: Option<Vec<OmdbSearchItem>>,
    /// API response status ("True"/"False")
    #[serde(rename = "Response")]
    pub response: Option<String>,
    /// Error message if the request failed
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// Single match within a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbSearchItem {
    /// Title of the media item
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year as string; series come back as ranges like "2019-2021"
    #[serde(rename = "Year")]
    pub year: String,
    /// IMDb identifier
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// URL to poster image, or "N/A"
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

/// Response from OMDb for a detail lookup (`i=` queries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbDetailResponse {
    /// Title of the media item
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// Release year as string
    #[serde(rename = "Year")]
    pub year: Option<String>,
    /// Plot summary or description
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    /// Genre classification
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    /// Runtime duration as string
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    /// IMDb rating as string
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    /// URL to poster image
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    /// IMDb identifier
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    /// API response status
    #[serde(rename = "Response")]
    pub response: Option<String>,
    /// Error message if the request failed
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbProvider {
    /// Creates a provider from OMDb configuration.
    pub fn new(config: OmdbConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn search_url(&self, query: &str) -> String {
        let mut url = format!(
            "{}?s={}",
            self.config.base_url,
            urlencoding::encode(query)
        );
        if let Some(ref api_key) = self.config.api_key {
            url.push_str(&format!("&apikey={api_key}"));
        }
        url
    }

    fn detail_url(&self, imdb_id: &str) -> String {
        let mut url = format!(
            "{}?i={}&plot=full",
            self.config.base_url,
            urlencoding::encode(imdb_id)
        );
        if let Some(ref api_key) = self.config.api_key {
            url.push_str(&format!("&apikey={api_key}"));
        }
        url
    }
}

#[async_trait]
impl MovieProvider for OmdbProvider {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SearchError> {
        let url = self.search_url(query);
        tracing::debug!(query, "querying OMDb");

        let response = self
            .client
            .get(&url)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| SearchError::SearchFailed {
                query: query.to_string(),
                reason: format!("HTTP request failed: {e}"),
            })?;

        let data: OmdbSearchResponse =
            response
                .json()
                .await
                .map_err(|e| SearchError::ParseError {
                    reason: format!("JSON parsing failed: {e}"),
                })?;

        parse_search_response(data)
    }

    async fn detail(&self, imdb_id: &str) -> Result<MovieDetails, SearchError> {
        let url = self.detail_url(imdb_id);
        tracing::debug!(imdb_id, "fetching OMDb details");

        let response = self
            .client
            .get(&url)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| SearchError::DetailFetchFailed {
                imdb_id: imdb_id.to_string(),
                reason: format!("HTTP request failed: {e}"),
            })?;

        let data: OmdbDetailResponse =
            response
                .json()
                .await
                .map_err(|e| SearchError::ParseError {
                    reason: format!("JSON parsing failed: {e}"),
                })?;

        parse_detail_response(imdb_id, data)
    }
}

/// Maps a search response into summaries, in response order.
///
/// OMDb reports "nothing matched" as `Response: "False"` with an error
/// message rather than an empty list; "not found" and "too many results"
/// are empty result sets here, not failures.
fn parse_search_response(data: OmdbSearchResponse) -> Result<Vec<MovieSummary>, SearchError> {
    if data.response.as_deref() == Some("False") {
        let message = data.error.unwrap_or_else(|| "Unknown error".to_string());
        if message.contains("not found") || message.contains("Too many results") {
            return Ok(Vec::new());
        }
        return Err(SearchError::ApiError { message });
    }

    Ok(data
        .search
        .unwrap_or_default()
        .into_iter()
        .map(summary_from_item)
        .collect())
}

/// Maps a detail response into `MovieDetails`, normalizing "N/A" sentinels.
fn parse_detail_response(
    requested_id: &str,
    data: OmdbDetailResponse,
) -> Result<MovieDetails, SearchError> {
    if data.response.as_deref() == Some("False") {
        return Err(SearchError::DetailFetchFailed {
            imdb_id: requested_id.to_string(),
            reason: data.error.unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    let rating = data
        .imdb_rating
        .and_then(|r| if r == "N/A" { None } else { r.parse().ok() });

    Ok(MovieDetails {
        imdb_id: data.imdb_id.unwrap_or_else(|| requested_id.to_string()),
        title: data.title.unwrap_or_else(|| "Unknown".to_string()),
        year: data.year.unwrap_or_default(),
        plot: not_na(data.plot),
        rating,
        genre: not_na(data.genre),
        runtime: not_na(data.runtime),
        poster_url: not_na(data.poster),
    })
}

fn summary_from_item(item: OmdbSearchItem) -> MovieSummary {
    MovieSummary {
        imdb_id: item.imdb_id,
        title: item.title,
        year: item.year,
        poster_url: not_na(item.poster),
    }
}

fn not_na(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "N/A")
}
