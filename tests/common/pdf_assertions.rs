use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Text shown by `Tj` operators on one page. Strings are WinAnsi encoded,
/// which matches Latin-1 for every character the statement prints.
pub fn page_text_runs(doc: &LopdfDocument, page: u32) -> Vec<String> {
    let Some(page_id) = doc.get_pages().get(&page).copied() else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };

    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(raw, _)) => Some(raw.iter().map(|b| *b as char).collect()),
            _ => None,
        })
        .collect()
}

/// BaseFont names of every font resource, inline or indirect.
pub fn font_names(doc: &LopdfDocument) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for dict in doc.objects.values().filter_map(|object| object.as_dict().ok()) {
        let Ok(fonts) = dict.get(b"Font").and_then(Object::as_dict) else {
            continue;
        };
        for (_, font) in fonts.iter() {
            let font = match font {
                Object::Reference(id) => doc.get_dictionary(*id).ok(),
                other => other.as_dict().ok(),
            };
            if let Some(name) = font.and_then(|f| f.get(b"BaseFont").and_then(Object::as_name).ok()) {
                names.insert(String::from_utf8_lossy(name).into_owned());
            }
        }
    }
    names
}

/// Number of image XObjects in the document, soft masks included.
pub fn image_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|object| match object {
            Object::Stream(stream) => Some(&stream.dict),
            _ => None,
        })
        .filter(|dict| matches!(dict.get(b"Subtype").and_then(Object::as_name), Ok(b"Image")))
        .count()
}

#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let runs = $pdf.all_text();
        assert!(
            runs.iter().any(|run| run == $text),
            "PDF should contain '{}', but its text runs were:\n{:#?}",
            $text,
            runs
        );
    };
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}
