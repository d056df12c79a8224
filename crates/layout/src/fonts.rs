//! Built-in metrics for the two Helvetica base faces.
//!
//! The engine never embeds font programs; it renders with the PDF base-14
//! Helvetica faces and measures ASCII text against their published AFM
//! advance widths (1/1000 em units). Measurement and truncation therefore
//! use per-glyph advances, not character counts. Latin-1 supplement glyphs
//! render as themselves but measure at a nominal width; see
//! [`advance_units`].

use factura_idf::FontSpec;

/// PDF points per millimeter.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Advance widths for Helvetica, codes 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // 0x20 space .. 0x2F /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30 0 .. 0x39 9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // 0x3A : .. 0x40 @
    278, 278, 584, 584, 584, 556, 1015,
    // 0x41 A .. 0x5A Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // 0x5B [ .. 0x60 `
    278, 278, 278, 469, 556, 333,
    // 0x61 a .. 0x7A z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // 0x7B { .. 0x7E ~
    334, 260, 334, 584,
];

/// Advance widths for Helvetica-Bold, codes 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Nominal advance for codes 0x80..=0xFF (most accented letters are
/// lowercase-letter width in both faces).
const LATIN1_DEFAULT: u16 = 556;

/// Advance width of one character in 1/1000 em.
///
/// ASCII is exact per the AFM tables. Codes 0x80..=0xFF render as real
/// glyphs but measure at [`LATIN1_DEFAULT`], which under-measures wide
/// glyphs such as 'Æ'. Characters above 0xFF measure as '?', the same
/// replacement byte the renderer emits, so for those measurement and
/// output do agree.
pub fn advance_units(font: &FontSpec, ch: char) -> u16 {
    let table: &[u16; 95] = if font.bold { &HELVETICA_BOLD } else { &HELVETICA };
    match ch as u32 {
        code @ 0x20..=0x7E => table[(code - 0x20) as usize],
        0x7F..=0xFF => LATIN1_DEFAULT,
        _ => table[(b'?' - 0x20) as usize],
    }
}

/// Measured width of `text` in mm when set in `font`.
pub fn text_width(text: &str, font: &FontSpec) -> f32 {
    let units: u32 = text.chars().map(|c| advance_units(font, c) as u32).sum();
    units as f32 * font.size / 1000.0 / PT_PER_MM
}
