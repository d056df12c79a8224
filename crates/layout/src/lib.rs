//! Layout engine for the invoice document.
//!
//! Pure functions from a validated record (plus precomputed totals) to an
//! ordered sequence of [`DrawOp`]s. Nothing here touches the clock, performs
//! I/O, or knows how the draw ops get serialized.

pub mod fonts;
pub mod grid;
pub mod text;

pub use grid::{layout_invoice, CELL_PADDING, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
pub use text::{truncate_to_width, ELLIPSIS};
