//! Shared helpers for the integration tests: fixture records and PDF
//! text extraction via `lopdf`.

use lopdf::Document;
use serde_json::{json, Value};

/// Routes pipeline warnings (dropped items, malformed collections) into the
/// test output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A well-formed upstream record matching the documented wire shape.
pub fn sample_record() -> Value {
    json!({
        "invoice_number": "F-1",
        "customer_name": "Acme",
        "customer_address": "Main St",
        "items": [
            {"description": "Widget", "quantity": 2, "unit_price": 50.0}
        ],
        "tax": {"rate": 0.15}
    })
}

/// Loads the produced bytes back in and extracts all page text.
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> String {
    let doc = Document::load_mem(pdf_bytes).expect("produced bytes should parse as a PDF");
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() as u32 {
        let page_text = doc
            .extract_text(&[page_num])
            .unwrap_or_else(|e| panic!("could not extract text from page {page_num}: {e}"));
        text.push_str(&page_text);
        text.push('\n');
    }
    text
}

/// Number of pages in the produced document.
pub fn page_count(pdf_bytes: &[u8]) -> usize {
    let doc = Document::load_mem(pdf_bytes).expect("produced bytes should parse as a PDF");
    doc.get_pages().len()
}
