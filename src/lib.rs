//! unit-binder: download every topic PDF of a unit and bind them into one document.
//!
//! The whole tool is one forward-only pipeline, run once per invocation:
//! list a unit's topics through the authenticated API, download each topic's
//! PDF in API order, merge the files page-by-page into a single document,
//! and publish it as an in-memory artifact with a base64 download link.
//!
//! # Usage
//! The [`bind`] module is the entrypoint for library consumers; the binary
//! wires it to the CLI. The pipeline talks to the API only through the
//! [`contract::TopicSource`] trait, so tests substitute mocks or a local
//! mock server.

pub mod api;
pub mod bind;
pub mod cli;
pub mod config;
pub mod contract;
pub mod download;
pub mod error;
pub mod load_config;
pub mod merge;
pub mod publish;
pub mod sanitize;

pub use error::{Error, Result};
