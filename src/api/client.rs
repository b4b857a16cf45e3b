use crate::api::types::{ApiEnvelope, LevelDescriptor, LevelNo, WordCard, WordDetail};
use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Fetch(reqwest::Error),
    Decode(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fetch(e) => write!(f, "request failed: {e}"),
            ApiError::Decode(e) => write!(f, "invalid response body: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Fetch(e) | ApiError::Decode(e) => Some(e),
        }
    }
}

/// Client for the three read-only vocabulary endpoints. No authentication,
/// no write operations.
#[derive(Debug)]
pub struct VocabClient {
    client: reqwest::Client,
    base_url: String,
}

impl VocabClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn levels(&self) -> Result<Vec<LevelDescriptor>, ApiError> {
        self.get(&format!("{}/levels/all", self.base_url)).await
    }

    pub async fn cards(&self, level: &LevelNo) -> Result<Vec<WordCard>, ApiError> {
        self.get(&format!("{}/level/{}", self.base_url, level)).await
    }

    pub async fn detail(&self, word_id: i64) -> Result<WordDetail, ApiError> {
        self.get(&format!("{}/word/{}", self.base_url, word_id)).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(ApiError::Fetch)?;
        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(ApiError::Decode)?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = VocabClient::new("https://example.com/api/");
        assert_eq!(client.base_url, "https://example.com/api");
    }

    #[test]
    fn test_base_url_kept_as_is() {
        let client = VocabClient::new("https://example.com/api");
        assert_eq!(client.base_url, "https://example.com/api");
    }
}
