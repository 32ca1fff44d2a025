//! PDF concatenation using lopdf.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lopdf::{dictionary, Document, Object, ObjectId};
use tracing::info;

use crate::error::{Error, Result};

/// Merge the given PDFs, in order, into a single document at `output`.
///
/// Pages keep their input order: all pages of the first file, then all pages
/// of the second, and so on. Any existing file at `output` is overwritten.
///
/// Fails with [`Error::NoMergeInputs`] on an empty input list, and with a
/// typed error when an input is missing, unparsable, or has no pages.
pub fn merge_pdfs(inputs: &[PathBuf], output: &Path) -> Result<()> {
    if inputs.is_empty() {
        return Err(Error::NoMergeInputs);
    }

    // Load every input, renumbering object ids so they cannot collide once
    // collected into one object table.
    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for path in inputs {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
        let mut doc = Document::load(path)?;
        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.clone()));
        }

        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        page_ids.extend(doc.get_pages().into_values());
        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.objects.extend(objects);
    // new_object_id must hand out ids above everything we just copied in.
    merged.max_id = max_id - 1;

    let pages_id = merged.new_object_id();
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let page_count = page_ids.len() as i64;
    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => page_count,
            "Kids" => kids,
        }),
    );

    let catalog_id = merged.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    merged.trailer.set("Root", catalog_id);

    // Every page now belongs to the single merged page tree.
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(dict)) = merged.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    merged.compress();
    merged.save(output)?;

    info!(
        inputs = inputs.len(),
        pages = page_ids.len(),
        output = %output.display(),
        "merged PDFs"
    );
    Ok(())
}

/// Number of pages in the PDF at `path`.
pub fn count_pages(path: &Path) -> Result<usize> {
    Ok(Document::load(path)?.get_pages().len())
}
