use factura_idf::{DrawOp, FontSpec, HAlign};
use factura_layout::fonts::{self, PT_PER_MM};
use factura_layout::{CELL_PADDING, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use thiserror::Error;

/// Serialization failure. Writing targets an in-memory buffer, so every
/// failure path here comes out of `lopdf` itself.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF processing error: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// Internal names of the two registered base fonts.
const FONT_REGULAR: &[u8] = b"F1";
const FONT_BOLD: &[u8] = b"F2";

/// Serializes a draw-op sequence into a complete PDF byte buffer.
///
/// The writer is a small cursor machine: `TextCell` draws at the cursor and
/// advances it right, `NewLine` returns to the left margin and advances down,
/// `PageBreak` flushes the current page. Output contains no clock-derived
/// data, so identical input always yields identical bytes.
pub fn render_document(ops: &[DrawOp]) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => regular_id, "F2" => bold_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    let mut content: Option<Content> = None;
    let mut x = MARGIN;
    let mut y = MARGIN;

    for op in ops {
        match op {
            DrawOp::PageBreak => {
                if let Some(done) = content.take() {
                    kids.push(flush_page(&mut doc, pages_id, resources_id, done)?.into());
                }
                content = Some(Content { operations: Vec::new() });
                x = MARGIN;
                y = MARGIN;
            }
            DrawOp::NewLine { advance } => {
                x = MARGIN;
                y += advance;
            }
            DrawOp::TextCell { text, width, height, border, align, font } => {
                let page = content.get_or_insert_with(|| Content { operations: Vec::new() });
                emit_cell(&mut page.operations, x, y, text, *width, *height, *border, *align, font);
                x += width;
            }
        }
    }
    if let Some(done) = content.take() {
        kids.push(flush_page(&mut doc, pages_id, resources_id, done)?.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(lopdf::Error::from)?;
    log::debug!("serialized {} draw ops into {} bytes", ops.len(), buffer.len());
    Ok(buffer)
}

fn flush_page(
    doc: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    content: Content,
) -> Result<ObjectId, RenderError> {
    let stream_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => stream_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            (PAGE_WIDTH * PT_PER_MM).into(),
            (PAGE_HEIGHT * PT_PER_MM).into(),
        ],
    });
    Ok(page_id)
}

#[allow(clippy::too_many_arguments)]
fn emit_cell(
    operations: &mut Vec<Operation>,
    x: f32,
    y: f32,
    text: &str,
    width: f32,
    height: f32,
    border: bool,
    align: HAlign,
    font: &FontSpec,
) {
    if border {
        // Stroked rectangle; PDF user space has its origin at the bottom left.
        operations.push(Operation::new(
            "re",
            vec![
                (x * PT_PER_MM).into(),
                ((PAGE_HEIGHT - y - height) * PT_PER_MM).into(),
                (width * PT_PER_MM).into(),
                (height * PT_PER_MM).into(),
            ],
        ));
        operations.push(Operation::new("S", vec![]));
    }

    if text.is_empty() {
        return;
    }

    let text_width = fonts::text_width(text, font);
    let text_x = match align {
        HAlign::Left => x + CELL_PADDING,
        HAlign::Center => x + (width - text_width) / 2.0,
        HAlign::Right => x + width - CELL_PADDING - text_width,
    };
    // Baseline roughly vertically centered within the cell.
    let baseline_y = y + height / 2.0 + 0.35 * (font.size / PT_PER_MM);
    let font_name = if font.bold { FONT_BOLD } else { FONT_REGULAR };

    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![Object::Name(font_name.to_vec()), font.size.into()],
    ));
    operations.push(Operation::new(
        "Td",
        vec![(text_x * PT_PER_MM).into(), ((PAGE_HEIGHT - baseline_y) * PT_PER_MM).into()],
    ));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| if c as u32 <= 255 { c as u8 } else { b'?' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ops() -> Vec<DrawOp> {
        vec![
            DrawOp::PageBreak,
            DrawOp::TextCell {
                text: "INVOICE".into(),
                width: 190.0,
                height: 10.0,
                border: false,
                align: HAlign::Center,
                font: FontSpec::bold(16.0),
            },
            DrawOp::NewLine { advance: 10.0 },
            DrawOp::TextCell {
                text: "Widget".into(),
                width: 80.0,
                height: 6.0,
                border: true,
                align: HAlign::Left,
                font: FontSpec::regular(10.0),
            },
        ]
    }

    #[test]
    fn output_is_a_pdf() {
        let bytes = render_document(&sample_ops()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn identical_ops_produce_identical_bytes() {
        let a = render_document(&sample_ops()).unwrap();
        let b = render_document(&sample_ops()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cells_without_leading_page_break_still_render() {
        let ops = vec![DrawOp::TextCell {
            text: "x".into(),
            width: 10.0,
            height: 5.0,
            border: false,
            align: HAlign::Left,
            font: FontSpec::regular(10.0),
        }];
        let bytes = render_document(&ops).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn empty_sequence_yields_zero_page_document() {
        let bytes = render_document(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn non_winansi_text_is_substituted() {
        let ops = vec![DrawOp::TextCell {
            text: "\u{4e16}\u{754c}".into(),
            width: 20.0,
            height: 5.0,
            border: false,
            align: HAlign::Left,
            font: FontSpec::regular(10.0),
        }];
        let bytes = render_document(&ops).unwrap();
        // The substituted literal shows up in the uncompressed stream.
        assert!(bytes.windows(4).any(|w| w == b"(??)"));
    }
}
