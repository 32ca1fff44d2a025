//! Publishing the merged document as a downloadable artifact.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::Result;

/// The merged document, fully loaded into memory, ready to hand to a caller.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Base name of the merged file, used as the `download` attribute.
    pub file_name: String,
    /// Complete file contents. There is no streaming variant.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Load the file at `path` fully into memory.
    pub fn load(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();
        let bytes = fs::read(path)?;
        Ok(Self { file_name, bytes })
    }

    /// Render the contents as a base64 `data:` URI.
    pub fn data_uri(&self) -> String {
        format!(
            "data:application/octet-stream;base64,{}",
            BASE64.encode(&self.bytes)
        )
    }

    /// Render an anchor element that downloads the artifact under its file name.
    pub fn download_link(&self, label: &str) -> String {
        format!(
            r#"<a href="{}" download="{}">{}</a>"#,
            self.data_uri(),
            self.file_name,
            label
        )
    }
}
