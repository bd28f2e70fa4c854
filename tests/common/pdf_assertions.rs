use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Extract the text of a single page (1-based)
pub fn extract_page_text(doc: &LopdfDocument, page_number: u32) -> String {
    doc.extract_text(&[page_number]).unwrap_or_default()
}

/// Count `Do` (XObject paint) operations in a page's content stream.
/// With no letterhead configured this equals the number of drawn images.
pub fn count_image_draws(doc: &LopdfDocument, page_number: u32) -> usize {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_number) else {
        return 0;
    };
    let Ok(data) = doc.get_page_content(*page_id) else {
        return 0;
    };
    let Ok(content) = Content::decode(&data) else {
        return 0;
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Do")
        .count()
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
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

/// Assert minimum number of pages
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

/// Assert that a specific page contains text
#[macro_export]
macro_rules! assert_page_contains_text {
    ($pdf:expr, $page:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_page_text(&$pdf.doc, $page);
        assert!(
            extracted.contains($text),
            "Page {} should contain '{}', but its text was:\n{}",
            $page,
            $text,
            extracted
        );
    };
}

/// Assert that a specific page does NOT contain text
#[macro_export]
macro_rules! assert_page_not_contains_text {
    ($pdf:expr, $page:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_page_text(&$pdf.doc, $page);
        assert!(
            !extracted.contains($text),
            "Page {} should NOT contain '{}', but its text was:\n{}",
            $page,
            $text,
            extracted
        );
    };
}
