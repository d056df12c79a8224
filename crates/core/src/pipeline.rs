//! The pipeline driver: validate, normalize per item, total, lay out, render.
//!
//! One synchronous invocation per document. The driver owns the only
//! recovery decision in the pipeline (dropping rows that fail normalization)
//! and the only clock access in [`generate_today`].

use chrono::Utc;
use serde_json::Value;

use crate::error::InvoiceError;
use crate::normalize::normalize_item;
use crate::totals::compute_totals;
use crate::validate::validate;
use factura_layout::layout_invoice;
use factura_render_lopdf::render_document;
use factura_types::InvoiceRecord;

/// The successful outcome of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    /// Complete single-page PDF.
    pub bytes: Vec<u8>,
    /// Suggested download filename, derived from the invoice number.
    pub filename: String,
    /// Number of line items dropped during normalization. Per-item detail is
    /// logged, not returned.
    pub dropped_items: usize,
}

/// Assembles a PDF invoice from an untrusted JSON record.
///
/// Pure function of `(raw, as_of)`: the generation date arrives pre-rendered
/// and flows into the document as plain text. Item-level failures drop the
/// offending row and continue; validation, totals-overflow, and rendering
/// failures abort with no byte buffer.
pub fn generate(raw: &Value, as_of: &str) -> Result<InvoiceDocument, InvoiceError> {
    let raw_invoice = validate(raw)?;

    let mut line_items = Vec::new();
    let mut dropped_items = 0;
    for (index, item) in raw_invoice.items.as_slice().iter().enumerate() {
        match normalize_item(item) {
            Ok(item) => line_items.push(item),
            Err(err) => {
                dropped_items += 1;
                log::warn!("dropping line item {index}: {err}");
            }
        }
    }

    let record = InvoiceRecord {
        number: raw_invoice.number,
        customer_name: raw_invoice.customer_name,
        customer_address: raw_invoice.customer_address,
        line_items,
        tax_rate: raw_invoice.tax_rate,
    };
    let totals = compute_totals(&record.line_items, record.tax_rate)?;
    let ops = layout_invoice(&record, &totals, as_of);
    let bytes = render_document(&ops)?;

    log::debug!(
        "assembled invoice {}: {} rows, {} bytes, {} dropped",
        record.number,
        record.line_items.len(),
        bytes.len(),
        dropped_items
    );
    Ok(InvoiceDocument { filename: suggested_filename(&record.number), bytes, dropped_items })
}

/// [`generate`] with the date computed once, here, at the top of the call.
pub fn generate_today(raw: &Value) -> Result<InvoiceDocument, InvoiceError> {
    let as_of = Utc::now().format("%Y-%m-%d").to_string();
    generate(raw, &as_of)
}

/// Derives a safe download filename from the invoice number.
pub fn suggested_filename(number: &str) -> String {
    let token = slug::slugify(number);
    if token.is_empty() {
        "invoice_unnumbered.pdf".to_string()
    } else {
        format!("invoice_{token}.pdf")
    }
}
