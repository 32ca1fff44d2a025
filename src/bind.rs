//! High-level pipeline: list topics, download their PDFs, merge, publish.
//!
//! This is the whole workflow of the tool, run once per invocation:
//!   - List the unit's topics through a [`TopicSource`]
//!   - Download each topic's PDF, in API order, into the output directory
//!   - Merge the downloaded files into one document
//!   - Load the merged document into an in-memory [`Artifact`]
//!
//! Control flows strictly forward; the first error aborts the run. The
//! pipeline holds no state across runs: a repeat invocation re-downloads
//! and re-merges from scratch, overwriting its previous output.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::contract::TopicSource;
use crate::download::{fetch_all, FetchedPdf};
use crate::error::Result;
use crate::merge::merge_pdfs;
use crate::publish::Artifact;
use crate::sanitize::sanitize_filename;

/// What to bind and where to put it.
#[derive(Debug, Clone)]
pub struct BindRequest {
    /// Unit whose topics are fetched.
    pub unit_id: String,
    /// Directory receiving the per-topic files and the merged output.
    pub output_dir: PathBuf,
    /// Desired name of the merged file; `.pdf` is appended when missing.
    pub output_name: String,
}

/// Outcome of one bind run.
#[derive(Debug)]
pub struct BindReport {
    pub unit_id: String,
    /// Number of topics the API listed, including those without a PDF.
    pub topics_listed: usize,
    /// Per-topic files written, in merge order.
    pub downloaded: Vec<FetchedPdf>,
    /// The merged document; None when no topic carried a PDF.
    pub artifact: Option<Artifact>,
}

/// Run the full pipeline for one unit.
pub async fn bind<S>(source: &S, request: &BindRequest) -> Result<BindReport>
where
    S: TopicSource + ?Sized,
{
    info!(unit_id = %request.unit_id, "starting bind run");

    let topics = source.list_topics(&request.unit_id).await?;
    let downloaded = fetch_all(source, &topics, &request.output_dir).await?;

    if downloaded.is_empty() {
        warn!(unit_id = %request.unit_id, "no topic carried a PDF, nothing to bind");
        return Ok(BindReport {
            unit_id: request.unit_id.clone(),
            topics_listed: topics.len(),
            downloaded,
            artifact: None,
        });
    }

    let output_path = request.output_dir.join(output_file_name(&request.output_name));
    let input_paths: Vec<PathBuf> = downloaded.iter().map(|f| f.path.clone()).collect();
    merge_pdfs(&input_paths, &output_path)?;

    let artifact = Artifact::load(&output_path)?;
    info!(
        unit_id = %request.unit_id,
        files = downloaded.len(),
        output = %output_path.display(),
        size = artifact.bytes.len(),
        "bind run complete"
    );

    Ok(BindReport {
        unit_id: request.unit_id.clone(),
        topics_listed: topics.len(),
        downloaded,
        artifact: Some(artifact),
    })
}

/// Sanitised merged-file name, guaranteed to end in `.pdf`.
fn output_file_name(requested: &str) -> String {
    let mut name = sanitize_filename(requested);
    if !name.to_lowercase().ends_with(".pdf") {
        name.push_str(".pdf");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_file_name_appends_extension_and_sanitises() {
        assert_eq!(output_file_name("Merged_Document.pdf"), "Merged_Document.pdf");
        assert_eq!(output_file_name("My_Doc"), "My_Doc.pdf");
        assert_eq!(output_file_name("notes.PDF"), "notes.PDF");
        assert_eq!(output_file_name("week:1"), "week_1.pdf");
    }
}
