//! HTTP client for the topics API.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::contract::{Topic, TopicSource};
use crate::error::{Error, Result};

/// Base URL of the production API.
pub const DEFAULT_API_URL: &str = "https://api.tesseractonline.com";

/// Client for the student topics API.
///
/// Listing topics sends the authorization key; fetching a PDF does not.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_key: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            auth_key: auth_key.into(),
        }
    }

    fn absolute_url(&self, relative: &str) -> String {
        format!("{}/{}", self.base_url, relative.trim_start_matches('/'))
    }
}

/// Wire format of the topics endpoint: `{ Error, payload: { topics } }`.
/// An absent `Error` field counts as an error, so it deserialises as Option.
#[derive(Debug, Deserialize)]
struct TopicsEnvelope {
    #[serde(rename = "Error")]
    error: Option<bool>,
    #[serde(default)]
    payload: TopicsPayload,
}

#[derive(Debug, Default, Deserialize)]
struct TopicsPayload {
    #[serde(default)]
    topics: Vec<Topic>,
}

#[async_trait]
impl TopicSource for ApiClient {
    async fn list_topics(&self, unit_id: &str) -> Result<Vec<Topic>> {
        let url = format!("{}/studentmaster/get-topics-unit/{}", self.base_url, unit_id);
        info!(url = %url, unit_id, "fetching topic list");

        let response = self
            .http
            .get(&url)
            .header("Authorization", &self.auth_key)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = %status, url = %url, "topic listing rejected");
            return Err(Error::TopicListStatus {
                unit_id: unit_id.to_string(),
                status,
            });
        }

        let envelope: TopicsEnvelope = response.json().await?;
        if envelope.error.unwrap_or(true) {
            error!(unit_id, "API flagged the topic listing as an error");
            return Err(Error::ApiRejected(unit_id.to_string()));
        }

        let topics = envelope.payload.topics;
        if topics.is_empty() {
            return Err(Error::NoTopics(unit_id.to_string()));
        }

        info!(count = topics.len(), unit_id, "topic list fetched");
        Ok(topics)
    }

    async fn fetch_pdf(&self, relative_url: &str) -> Result<Vec<u8>> {
        let url = self.absolute_url(relative_url);
        debug!(url = %url, "downloading pdf");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            // The body is still persisted verbatim downstream.
            warn!(status = %status, url = %url, "pdf download returned non-200");
        }

        Ok(response.bytes().await?.to_vec())
    }
}
