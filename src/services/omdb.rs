//! OMDb API client.
//!
//! The API key comes from the `OMDB_API_KEY` environment variable (or the
//! config file). Lookups carry a short fixed timeout so an unreachable
//! service fails the Add command quickly instead of hanging the menu.

use crate::models::config::OmdbConfig;
use crate::{Error, Result};
use serde::Deserialize;
use tracing::debug;

const OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

/// OMDb API client.
pub struct OmdbClient {
    config: OmdbConfig,
    client: reqwest::Client,
}

/// Raw OMDb response payload.
///
/// OMDb signals "not found" in-band: `{"Response": "False", "Error": "..."}`.
/// All numeric fields arrive as strings.
#[derive(Debug, Deserialize)]
struct OmdbPayload {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

/// Normalized result of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieLookup {
    /// Canonical title as OMDb spells it, which may differ from the query.
    pub title: String,
    /// Release year; 0 when OMDb's value does not parse as an integer.
    pub year: i32,
    /// IMDb rating; 0.0 when the value does not parse (OMDb sends "N/A").
    pub rating: f64,
    /// Poster URL or "N/A".
    pub poster: String,
}

impl MovieLookup {
    fn from_payload(payload: OmdbPayload, query_title: &str) -> Self {
        Self {
            title: payload.title.unwrap_or_else(|| query_title.to_string()),
            year: payload
                .year
                .and_then(|y| y.parse().ok())
                .unwrap_or(0),
            rating: payload
                .imdb_rating
                .and_then(|r| r.parse().ok())
                .unwrap_or(0.0),
            poster: payload.poster.unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Resolve a title to its canonical movie attributes.
    ///
    /// Distinguishes the three outcomes the caller cares about:
    /// `Ok` on a hit, [`Error::MovieNotFound`] when OMDb has no match, and
    /// [`Error::Http`] when the service is unreachable or times out.
    pub async fn lookup(&self, title: &str) -> Result<MovieLookup> {
        let api_key = self.config.api_key.as_deref().ok_or(Error::ApiKeyMissing)?;

        let url = format!(
            "{}?t={}&apikey={}",
            OMDB_BASE_URL,
            urlencoding::encode(title),
            api_key
        );

        debug!("querying OMDb for '{}'", title);
        let payload: OmdbPayload = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if payload.response != "True" {
            return Err(Error::MovieNotFound(title.to_string()));
        }

        Ok(MovieLookup::from_payload(payload, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(year: &str, rating: &str) -> OmdbPayload {
        OmdbPayload {
            response: "True".to_string(),
            title: Some("The Matrix".to_string()),
            year: Some(year.to_string()),
            imdb_rating: Some(rating.to_string()),
            poster: Some("http://example.com/matrix.jpg".to_string()),
        }
    }

    #[test]
    fn normalizes_parsed_fields() {
        let lookup = MovieLookup::from_payload(payload("1999", "8.7"), "matrix");
        assert_eq!(lookup.title, "The Matrix");
        assert_eq!(lookup.year, 1999);
        assert_eq!(lookup.rating, 8.7);
    }

    #[test]
    fn unparseable_year_becomes_zero() {
        // OMDb uses ranges like "2010-2012" for series
        let lookup = MovieLookup::from_payload(payload("2010-2012", "8.7"), "matrix");
        assert_eq!(lookup.year, 0);
    }

    #[test]
    fn unparseable_rating_becomes_zero() {
        let lookup = MovieLookup::from_payload(payload("1999", "N/A"), "matrix");
        assert_eq!(lookup.rating, 0.0);
    }

    #[test]
    fn missing_fields_fall_back() {
        let payload = OmdbPayload {
            response: "True".to_string(),
            title: None,
            year: None,
            imdb_rating: None,
            poster: None,
        };
        let lookup = MovieLookup::from_payload(payload, "obscure film");
        assert_eq!(lookup.title, "obscure film");
        assert_eq!(lookup.year, 0);
        assert_eq!(lookup.rating, 0.0);
        assert_eq!(lookup.poster, "N/A");
    }
}
