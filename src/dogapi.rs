//! Client for thedogapi.com
//!
//! Uses async reqwest for non-blocking HTTP requests. The base URL is
//! injectable so tests can point the client at a mock server.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Production API base URL
pub const DOG_API_URL: &str = "https://api.thedogapi.com/v1";

/// Substitute image URL returned when metadata cannot be fetched
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=No+image+available";

const USER_AGENT: &str = "BreedViewer/1.0";

/// A dog breed as returned by the API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Breed {
    pub id: u32,
    pub name: String,
    /// Image cache key for this breed's reference photo
    #[serde(default)]
    pub reference_image_id: Option<String>,
    #[serde(default)]
    pub breed_group: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub temperament: Option<String>,
}

/// Image metadata for a reference image id
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BreedImage {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl BreedImage {
    /// The fixed "no image available" substitute
    pub fn placeholder() -> Self {
        Self {
            id: None,
            url: PLACEHOLDER_IMAGE_URL.to_string(),
            width: None,
            height: None,
        }
    }

    /// Check whether this is the substitute rather than real metadata
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_IMAGE_URL
    }
}

/// Client for the dog breed API
#[derive(Debug, Clone)]
pub struct DogApi {
    base_url: String,
    client: reqwest::Client,
}

impl Default for DogApi {
    fn default() -> Self {
        Self::new(DOG_API_URL)
    }
}

impl DogApi {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the full breed list
    pub async fn fetch_breeds(&self) -> ApiResult<Vec<Breed>> {
        let url = format!("{}/breeds", self.base_url);
        log::debug!("Fetching breed list: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<Vec<Breed>>().await?)
        } else {
            Err(ApiError::HttpStatus(response.status()))
        }
    }

    /// Fetch image metadata for a specific reference image id
    pub async fn fetch_image(&self, image_id: &str) -> ApiResult<BreedImage> {
        let url = format!("{}/images/{}", self.base_url, image_id);
        log::debug!("Fetching image metadata: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<BreedImage>().await?)
        } else {
            Err(ApiError::HttpStatus(response.status()))
        }
    }
}

#[cfg(test)]
#[path = "dogapi_tests.rs"]
mod tests;
