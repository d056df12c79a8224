//! Deterministic text truncation against a measured width.

use factura_idf::FontSpec;

use crate::fonts;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Fits `text` into `max_width` mm under `font`.
///
/// Text that already fits is returned unchanged. Otherwise the last character
/// is dropped and `text + ELLIPSIS` re-measured until it fits. The loop
/// bottoms out at an empty base string; in that case the marker alone is
/// returned even if it still overflows the column. Known boundary: a column
/// narrower than the marker cannot be rendered within its width.
pub fn truncate_to_width(text: &str, max_width: f32, font: &FontSpec) -> String {
    if fonts::text_width(text, font) <= max_width {
        return text.to_string();
    }
    let mut base = text.to_string();
    while !base.is_empty() {
        base.pop();
        if fonts::text_width(&format!("{base}{ELLIPSIS}"), font) <= max_width {
            break;
        }
    }
    base.push_str(ELLIPSIS);
    base
}
