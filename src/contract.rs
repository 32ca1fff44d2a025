//! Contract between the bind pipeline and the topic API.
//!
//! The pipeline only ever talks to the API through [`TopicSource`], so the
//! real HTTP client and deterministic test mocks are interchangeable. The
//! trait is annotated for `mockall` so consumers can generate mocks for
//! unit and integration tests.

use async_trait::async_trait;
#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use serde::Deserialize;

use crate::error::Result;

/// One content unit of a unit, as returned by the topics endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    /// Display name of the topic; the API may omit it.
    #[serde(default = "unnamed_topic")]
    pub name: String,
    /// Relative URL of the topic's PDF; null or absent when the topic has none.
    #[serde(default)]
    pub pdf: Option<String>,
}

fn unnamed_topic() -> String {
    "topic".to_string()
}

impl Topic {
    /// Relative PDF URL, treating an empty string the same as absent.
    pub fn pdf_url(&self) -> Option<&str> {
        self.pdf.as_deref().filter(|u| !u.is_empty())
    }
}

/// Trait for listing a unit's topics and fetching their PDFs.
/// Implemented by the real API client and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// List all topics of the given unit, in the order the API returns them.
    async fn list_topics(&self, unit_id: &str) -> Result<Vec<Topic>>;

    /// Fetch the raw bytes behind a topic's relative PDF URL.
    ///
    /// The body is returned verbatim, whatever the response status was.
    async fn fetch_pdf(&self, relative_url: &str) -> Result<Vec<u8>>;
}
