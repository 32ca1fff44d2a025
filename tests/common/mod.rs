//! Shared helpers: generate small real PDFs in memory so the suites need no
//! binary fixtures.
#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Serialise a valid PDF with `pages` single-line text pages.
///
/// Each page carries its own Resources entry so the documents survive being
/// reparented into a merged page tree.
pub fn pdf_bytes(pages: usize, label: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in 0..pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("{label} page {page}"))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialise test pdf");
    buf
}

/// Write a generated PDF to `path`.
pub fn write_pdf(path: &Path, pages: usize, label: &str) {
    std::fs::write(path, pdf_bytes(pages, label)).expect("write test pdf");
}

/// True when the decompressed content of page `page_number` (1-based)
/// contains `needle`.
pub fn page_contains(doc: &Document, page_number: u32, needle: &str) -> bool {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let content = doc.get_page_content(page_id).expect("page content");
    content
        .windows(needle.len())
        .any(|window| window == needle.as_bytes())
}
