//! PDF serialization of draw-op sequences using `lopdf`.
//!
//! Fully buffered and deterministic: identical op sequences produce
//! byte-identical PDFs. No timestamps, no compression, no font embedding.

mod renderer;

pub use renderer::{render_document, RenderError};
