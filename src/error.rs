//! Error types for the unit-binder library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the unit-binder library
#[derive(Error, Debug)]
pub enum Error {
    /// Required authorization key was missing or empty
    #[error("authorization key is missing or empty")]
    MissingAuthKey,

    /// Required unit id was missing or empty
    #[error("unit id is missing or empty")]
    MissingUnitId,

    /// Topic listing returned a non-200 status
    #[error("topic listing for unit {unit_id} failed with status {status}")]
    TopicListStatus {
        unit_id: String,
        status: reqwest::StatusCode,
    },

    /// The API answered 200 but flagged the response as an error
    #[error("API reported an error for unit {0}; check the authorization key and unit id")]
    ApiRejected(String),

    /// The unit exists but carries no topics
    #[error("no topics found in unit {0}")]
    NoTopics(String),

    /// Merge was invoked with an empty input list
    #[error("no input files to merge")]
    NoMergeInputs,

    /// A merge input does not exist on disk
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A merge input parsed as a PDF but contains no pages
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// HTTP transport or decoding error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// PDF parsing or serialisation error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
