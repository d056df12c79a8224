//! Invoice assembly core: validation, normalization, totals, and the
//! pipeline driver that turns an untrusted JSON record into PDF bytes.
//!
//! The whole pipeline is a pure function of `(record, as_of_date)` — no
//! internal clock access, no I/O, no shared state — so it is safely callable
//! from any number of threads at once.

pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod totals;
pub mod validate;

pub use error::{InvoiceError, ItemError, TotalsOverflow, ValidationError};
pub use normalize::normalize_item;
pub use pipeline::{generate, generate_today, suggested_filename, InvoiceDocument};
pub use totals::compute_totals;
pub use validate::{validate, ItemsValue, RawInvoice};
