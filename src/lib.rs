//! # factura
//!
//! Deterministic invoice document assembly: an untrusted JSON record goes
//! in, a single-page fixed-layout PDF byte buffer comes out.
//!
//! The pipeline is validator → per-item normalizer → totals calculator →
//! layout engine → serializer, each stage a pure function. Item-level
//! failures drop the offending row and continue; record-level and
//! serializer-level failures abort the call with a structured error and no
//! partial output.
//!
//! ```no_run
//! use serde_json::json;
//!
//! let record = json!({
//!     "invoice_number": "F-1",
//!     "customer_name": "Acme",
//!     "customer_address": "Main St",
//!     "items": [{"description": "Widget", "quantity": 2, "unit_price": 50.0}],
//!     "tax": {"rate": 0.15}
//! });
//! let doc = factura::generate(&record, "2026-08-27")?;
//! std::fs::write(&doc.filename, &doc.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use factura_core::{
    compute_totals, generate, generate_today, normalize_item, suggested_filename, validate,
    InvoiceDocument, InvoiceError, ItemError, ItemsValue, RawInvoice, TotalsOverflow,
    ValidationError,
};
pub use factura_idf::{DrawOp, FontSpec, HAlign};
pub use factura_layout::{layout_invoice, truncate_to_width, ELLIPSIS};
pub use factura_render_lopdf::{render_document, RenderError};
pub use factura_types::{money, InvoiceRecord, LineItem, Totals};
