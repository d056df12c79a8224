//! Fixed-grid layout of the invoice page.
//!
//! One page, three bands: header (title, invoice metadata, customer block),
//! tabular body (one bordered row per line item), totals band. The layout is
//! a pure function; pagination on overflow is explicitly out of scope.

use factura_idf::{DrawOp, FontSpec, HAlign};
use factura_types::money;
use factura_types::{InvoiceRecord, Totals};

use crate::text::truncate_to_width;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 10.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Horizontal padding between a cell's edge and its text.
pub const CELL_PADDING: f32 = 1.0;

// Table column widths, mm.
pub const DESCRIPTION_COL: f32 = 80.0;
pub const QUANTITY_COL: f32 = 20.0;
pub const UNIT_PRICE_COL: f32 = 40.0;
pub const TOTAL_COL: f32 = 40.0;

/// Width available to the description text before truncation applies.
pub const DESCRIPTION_TEXT_WIDTH: f32 = DESCRIPTION_COL - 2.0 * CELL_PADDING;

/// The totals band shares the table's right edge: borderless label cell
/// spanning the first three columns, bordered amount cell under the last.
const TOTALS_LABEL_COL: f32 = DESCRIPTION_COL + QUANTITY_COL + UNIT_PRICE_COL;

const TITLE_FONT: FontSpec = FontSpec::bold(16.0);
const LABEL_FONT: FontSpec = FontSpec::bold(11.0);
const HEADER_FONT: FontSpec = FontSpec::bold(10.0);
const BODY_FONT: FontSpec = FontSpec::regular(10.0);
const TOTALS_FONT: FontSpec = FontSpec::bold(10.0);

const META_ROW_H: f32 = 5.0;
const HEADER_ROW_H: f32 = 7.0;
const ITEM_ROW_H: f32 = 6.0;
const TOTALS_ROW_H: f32 = 7.0;

fn cell(text: impl Into<String>, width: f32, height: f32, border: bool, align: HAlign, font: FontSpec) -> DrawOp {
    DrawOp::TextCell { text: text.into(), width, height, border, align, font }
}

/// Lays the invoice out as an ordered draw-op sequence.
///
/// `as_of` is the pre-rendered generation date; the layout engine never reads
/// the clock itself.
pub fn layout_invoice(record: &InvoiceRecord, totals: &Totals, as_of: &str) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    ops.push(DrawOp::PageBreak);

    // Title band.
    ops.push(cell("INVOICE", CONTENT_WIDTH, 10.0, false, HAlign::Center, TITLE_FONT));
    ops.push(DrawOp::NewLine { advance: 10.0 });
    ops.push(DrawOp::NewLine { advance: 10.0 });

    // Invoice metadata, right-aligned.
    ops.push(cell(
        format!("Invoice No: {}", record.number),
        CONTENT_WIDTH,
        META_ROW_H,
        false,
        HAlign::Right,
        BODY_FONT,
    ));
    ops.push(DrawOp::NewLine { advance: META_ROW_H });
    ops.push(cell(format!("Date: {as_of}"), CONTENT_WIDTH, META_ROW_H, false, HAlign::Right, BODY_FONT));
    ops.push(DrawOp::NewLine { advance: META_ROW_H });
    ops.push(DrawOp::NewLine { advance: 5.0 });

    // Customer block, left-aligned.
    ops.push(cell("Customer:", CONTENT_WIDTH, 6.0, false, HAlign::Left, LABEL_FONT));
    ops.push(DrawOp::NewLine { advance: 6.0 });
    ops.push(cell(record.customer_name.clone(), CONTENT_WIDTH, META_ROW_H, false, HAlign::Left, BODY_FONT));
    ops.push(DrawOp::NewLine { advance: META_ROW_H });
    ops.push(cell(record.customer_address.clone(), CONTENT_WIDTH, META_ROW_H, false, HAlign::Left, BODY_FONT));
    ops.push(DrawOp::NewLine { advance: META_ROW_H });
    ops.push(DrawOp::NewLine { advance: 10.0 });

    // Table header row.
    ops.push(cell("Description", DESCRIPTION_COL, HEADER_ROW_H, true, HAlign::Left, HEADER_FONT));
    ops.push(cell("Qty", QUANTITY_COL, HEADER_ROW_H, true, HAlign::Center, HEADER_FONT));
    ops.push(cell("Unit Price", UNIT_PRICE_COL, HEADER_ROW_H, true, HAlign::Right, HEADER_FONT));
    ops.push(cell("Total", TOTAL_COL, HEADER_ROW_H, true, HAlign::Right, HEADER_FONT));
    ops.push(DrawOp::NewLine { advance: HEADER_ROW_H });

    // One bordered row per surviving item, original order.
    for item in &record.line_items {
        let description = truncate_to_width(&item.description, DESCRIPTION_TEXT_WIDTH, &BODY_FONT);
        ops.push(cell(description, DESCRIPTION_COL, ITEM_ROW_H, true, HAlign::Left, BODY_FONT));
        ops.push(cell(money::format_quantity(item.quantity), QUANTITY_COL, ITEM_ROW_H, true, HAlign::Center, BODY_FONT));
        ops.push(cell(money::format_amount(item.unit_price), UNIT_PRICE_COL, ITEM_ROW_H, true, HAlign::Right, BODY_FONT));
        ops.push(cell(money::format_amount(item.extended_total), TOTAL_COL, ITEM_ROW_H, true, HAlign::Right, BODY_FONT));
        ops.push(DrawOp::NewLine { advance: ITEM_ROW_H });
    }

    ops.push(DrawOp::NewLine { advance: 5.0 });

    // Totals band: fixed row order, amounts in bordered cells.
    let tax_label = format!("Tax ({}%):", money::format_percent(record.tax_rate));
    let rows = [
        ("Subtotal:".to_string(), totals.subtotal),
        (tax_label, totals.tax_amount),
        ("Grand Total:".to_string(), totals.grand_total),
    ];
    for (label, amount) in rows {
        ops.push(cell(label, TOTALS_LABEL_COL, TOTALS_ROW_H, false, HAlign::Right, TOTALS_FONT));
        ops.push(cell(money::format_amount(amount), TOTAL_COL, TOTALS_ROW_H, true, HAlign::Right, TOTALS_FONT));
        ops.push(DrawOp::NewLine { advance: TOTALS_ROW_H });
    }

    log::debug!("laid out {} draw ops for invoice {}", ops.len(), record.number);
    ops
}
