//! Error taxonomy for the assembly pipeline.
//!
//! Record-level and serializer-level failures abort the call; item-level
//! failures are recovered by the driver (the row is dropped and logged) and
//! never reach the caller as an error.

use factura_render_lopdf::RenderError;
use thiserror::Error;

/// Fatal: a required top-level field is absent or has the wrong type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing or wrong-typed required field: {path}")]
    MissingField { path: String },
}

impl ValidationError {
    pub fn missing(path: impl Into<String>) -> Self {
        ValidationError::MissingField { path: path.into() }
    }
}

/// Recoverable: one line item failed coercion. The driver drops the row and
/// keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("line item has no usable description")]
    MissingDescription,
    #[error("line item field '{field}' is missing or not numeric")]
    NonNumeric { field: &'static str },
    #[error("line item total exceeds the representable amount range")]
    AmountOverflow,
}

/// Fatal: aggregating the surviving items overflowed the decimal range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invoice totals exceed the representable amount range")]
pub struct TotalsOverflow;

/// The single failure type a caller of the pipeline sees. No partial byte
/// buffer accompanies any of these.
#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("invoice validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("totals aggregation failed: {0}")]
    Totals(#[from] TotalsOverflow),
    #[error("document rendering failed: {0}")]
    Render(#[from] RenderError),
}
