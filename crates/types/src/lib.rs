//! Foundation types for the invoice engine.
//!
//! This crate defines the validated, immutable data model that flows through
//! the pipeline, plus the money-formatting rules shared by layout and tests.

pub mod money;
pub mod record;

pub use record::{InvoiceRecord, LineItem, Totals};
