//! Intermediate Draw Format (IDF)
//! This crate defines the flat, ordered list of draw operations the layout
//! engine produces and the renderer consumes. The renderer knows nothing
//! about invoices; the layout engine knows nothing about PDF syntax.
//!
//! All geometry is expressed in millimeters on the page, measured from the
//! top-left corner, the way the layout engine thinks about the page. The
//! renderer owns the conversion into PDF user space.

/// Horizontal alignment of text within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Font selection for a cell.
///
/// The engine renders with a single fixed family (Helvetica) in two faces;
/// anything richer is out of scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Size in points.
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// An atomic layout instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Place a cell at the cursor and advance the cursor right by `width`.
    /// The cursor's vertical position is unchanged.
    TextCell {
        text: String,
        /// Cell width in mm.
        width: f32,
        /// Cell height in mm.
        height: f32,
        /// Whether to stroke the cell's rectangle.
        border: bool,
        align: HAlign,
        font: FontSpec,
    },
    /// Return the cursor to the left margin and move it down by `advance` mm.
    NewLine { advance: f32 },
    /// Finish the current page (if one is open) and start a fresh one.
    PageBreak,
}

impl DrawOp {
    /// Convenience accessor for the cell text, if this op is a cell.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::TextCell { text, .. } => Some(text),
            _ => None,
        }
    }
}
