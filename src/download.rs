//! Sequential download of topic PDFs into a local directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::contract::{Topic, TopicSource};
use crate::error::Result;
use crate::sanitize::sanitize_filename;

/// One downloaded topic PDF: which topic it came from and where it landed.
#[derive(Debug, Clone)]
pub struct FetchedPdf {
    pub topic_name: String,
    pub path: PathBuf,
}

/// Download the PDF of every topic that has one into `output_dir`.
///
/// Topics are fetched strictly one after another, in the order given, so the
/// returned manifest preserves API order. Topics without a PDF are skipped.
/// Response bodies are written verbatim; there is no retry and no
/// content-type check. The directory is created if absent.
pub async fn fetch_all<S>(source: &S, topics: &[Topic], output_dir: &Path) -> Result<Vec<FetchedPdf>>
where
    S: TopicSource + ?Sized,
{
    fs::create_dir_all(output_dir)?;

    let mut used_names: HashSet<String> = HashSet::new();
    let mut fetched = Vec::new();

    for topic in topics {
        let Some(relative_url) = topic.pdf_url() else {
            debug!(topic = %topic.name, "topic has no pdf, skipping");
            continue;
        };

        let bytes = source.fetch_pdf(relative_url).await?;
        let file_name = unique_file_name(&mut used_names, &sanitize_filename(&topic.name));
        let path = output_dir.join(&file_name);
        fs::write(&path, &bytes)?;

        info!(
            topic = %topic.name,
            path = %path.display(),
            bytes = bytes.len(),
            "downloaded topic pdf"
        );
        fetched.push(FetchedPdf {
            topic_name: topic.name.clone(),
            path,
        });
    }

    Ok(fetched)
}

/// Resolve filename collisions within one run by appending ` (1)`, ` (2)`, …
/// before the extension. Repeat runs still overwrite their previous output.
fn unique_file_name(used: &mut HashSet<String>, stem: &str) -> String {
    let base = format!("{stem}.pdf");
    if used.insert(base.clone()) {
        return base;
    }
    let mut attempt = 1;
    loop {
        let candidate = format!("{stem} ({attempt}).pdf");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collisions_get_numeric_suffixes() {
        let mut used = HashSet::new();
        assert_eq!(unique_file_name(&mut used, "Intro"), "Intro.pdf");
        assert_eq!(unique_file_name(&mut used, "Intro"), "Intro (1).pdf");
        assert_eq!(unique_file_name(&mut used, "Intro"), "Intro (2).pdf");
        assert_eq!(unique_file_name(&mut used, "Other"), "Other.pdf");
    }
}
