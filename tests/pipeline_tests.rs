//! End-to-end pipeline behavior: the documented example record, the error
//! taxonomy at the call boundary, and the per-item recovery rules.

mod common;

use common::{extract_text_from_pdf, sample_record};
use factura::{generate, InvoiceError};
use serde_json::json;

#[test]
fn end_to_end_example_record() {
    let doc = generate(&sample_record(), "2026-08-27").unwrap();

    assert_eq!(doc.filename, "invoice_f-1.pdf");
    assert_eq!(doc.dropped_items, 0);

    let text = extract_text_from_pdf(&doc.bytes);
    assert!(text.contains("INVOICE"));
    assert!(text.contains("Invoice No: F-1"));
    assert!(text.contains("Date: 2026-08-27"));
    assert!(text.contains("Acme"));
    assert!(text.contains("Main St"));
    // The single table row: Widget | 2 | 50.00 | 100.00.
    assert!(text.contains("Widget"));
    assert!(text.contains("50.00"));
    assert!(text.contains("100.00"));
    // Totals band.
    assert!(text.contains("Subtotal:"));
    assert!(text.contains("Tax (15%):"));
    assert!(text.contains("15.00"));
    assert!(text.contains("Grand Total:"));
    assert!(text.contains("115.00"));
}

#[test]
fn missing_required_field_is_fatal() {
    for key in ["invoice_number", "customer_name", "customer_address", "items"] {
        let mut input = sample_record();
        input.as_object_mut().unwrap().remove(key);
        let err = generate(&input, "2026-08-27").unwrap_err();
        assert!(matches!(err, InvoiceError::Validation(_)), "expected fatal failure for {key}");
    }
}

#[test]
fn unparseable_tax_rate_is_fatal() {
    let mut input = sample_record();
    input["tax"]["rate"] = json!({"nested": true});
    assert!(generate(&input, "2026-08-27").is_err());
}

#[test]
fn malformed_item_collection_yields_empty_document() {
    common::init_logging();
    let mut input = sample_record();
    input["items"] = json!({"oops": "not a list"});
    let doc = generate(&input, "2026-08-27").unwrap();

    let text = extract_text_from_pdf(&doc.bytes);
    assert!(!text.contains("Widget"));
    assert!(text.contains("Subtotal:"));
    assert!(text.contains("0.00"));
}

#[test]
fn bad_items_are_dropped_and_excluded_from_totals() {
    common::init_logging();
    let mut input = sample_record();
    input["items"].as_array_mut().unwrap().extend([
        json!({"description": "No price", "quantity": 1}),
        json!({"description": "Bad qty", "quantity": "several", "unit_price": 10}),
        json!({"description": "Gadget", "quantity": 1, "unit_price": 20}),
    ]);

    let doc = generate(&input, "2026-08-27").unwrap();
    assert_eq!(doc.dropped_items, 2);

    let text = extract_text_from_pdf(&doc.bytes);
    assert!(text.contains("Widget"));
    assert!(text.contains("Gadget"));
    assert!(!text.contains("No price"));
    assert!(!text.contains("Bad qty"));
    // Subtotal covers only the surviving rows: 100 + 20.
    assert!(text.contains("120.00"));
    assert!(text.contains("138.00"));
}

#[test]
fn astronomically_priced_item_is_dropped_not_a_panic() {
    common::init_logging();
    let mut input = sample_record();
    input["items"]
        .as_array_mut()
        .unwrap()
        .push(json!({"description": "Astronomical", "quantity": "1e28", "unit_price": "1e28"}));

    // The factors parse but their product overflows the decimal range; the
    // row is dropped like any other bad item and the document still builds.
    let doc = generate(&input, "2026-08-27").unwrap();
    assert_eq!(doc.dropped_items, 1);

    let text = extract_text_from_pdf(&doc.bytes);
    assert!(!text.contains("Astronomical"));
    assert!(text.contains("115.00"));
}

#[test]
fn totals_overflow_is_a_structured_fatal_error() {
    let mut input = sample_record();
    // Each row's own total is representable; only their sum is not.
    input["items"] = json!([
        {"description": "A", "quantity": 1, "unit_price": "7.9e28"},
        {"description": "B", "quantity": 1, "unit_price": "7.9e28"},
    ]);
    let err = generate(&input, "2026-08-27").unwrap_err();
    assert!(matches!(err, InvoiceError::Totals(_)));
}

#[test]
fn empty_item_list_produces_zero_totals() {
    let mut input = sample_record();
    input["items"] = json!([]);
    let doc = generate(&input, "2026-08-27").unwrap();

    let text = extract_text_from_pdf(&doc.bytes);
    assert!(text.contains("Subtotal:"));
    assert!(text.contains("0.00"));
    assert!(text.contains("Grand Total:"));
}

#[test]
fn reordering_items_does_not_change_totals() {
    let mut forward = sample_record();
    forward["items"] = json!([
        {"description": "A", "quantity": 0.1, "unit_price": 0.3},
        {"description": "B", "quantity": 7, "unit_price": 19.99},
        {"description": "C", "quantity": 2.5, "unit_price": 0.01},
    ]);
    let mut backward = forward.clone();
    backward["items"].as_array_mut().unwrap().reverse();

    let text_a = extract_text_from_pdf(&generate(&forward, "2026-08-27").unwrap().bytes);
    let text_b = extract_text_from_pdf(&generate(&backward, "2026-08-27").unwrap().bytes);

    // Subtotal 139.985 formats half-to-even as 139.98.
    for total in ["139.98", "21.00", "160.98"] {
        assert!(text_a.contains(total), "missing {total} in forward order");
        assert!(text_b.contains(total), "missing {total} in backward order");
    }
}

#[test]
fn truncated_description_keeps_document_valid() {
    let mut input = sample_record();
    input["items"].as_array_mut().unwrap().push(json!({
        "description": "An exceedingly verbose description of a product ".repeat(10),
        "quantity": 1,
        "unit_price": 5
    }));

    let doc = generate(&input, "2026-08-27").unwrap();
    let text = extract_text_from_pdf(&doc.bytes);
    assert!(text.contains("..."));
    assert!(text.contains("An exceedingly"));
}
