//! FILENAME: export-engine/src/pdf_writer.rs
//! PDF table rendering.
//!
//! A4 landscape, titled, with a generation date line, a repeating header
//! band, alternating row shading, and right-aligned numeric cells. Rows
//! flow across as many pages as needed; nothing is truncated vertically.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, Point, Polygon, PolygonMode, PdfDocument,
    PdfLayerReference, Rgb,
};

use model::FieldValue;

use crate::{ExportError, ExportTable};

// A4 landscape geometry, in millimetres
const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 10.0;
const ROW_HEIGHT: f32 = 6.0;
const CELL_PADDING: f32 = 1.2;

const TITLE_SIZE: f32 = 16.0;
const META_SIZE: f32 = 10.0;
const CELL_SIZE: f32 = 7.0;

/// Approximate glyph advance for 7pt Helvetica, used for truncation and
/// right alignment. The format itself does not clip overlong text.
const CHAR_WIDTH: f32 = 1.3;

fn header_fill() -> Color {
    Color::Rgb(Rgb::new(0.21, 0.64, 0.92, None))
}

fn stripe_fill() -> Color {
    Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn fill_band(layer: &PdfLayerReference, y_baseline: f32, color: Color) {
    layer.set_fill_color(color);
    let points = vec![
        (Point::new(Mm(MARGIN), Mm(y_baseline - 2.0)), false),
        (
            Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y_baseline - 2.0)),
            false,
        ),
        (
            Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y_baseline + ROW_HEIGHT - 2.0)),
            false,
        ),
        (
            Point::new(Mm(MARGIN), Mm(y_baseline + ROW_HEIGHT - 2.0)),
            false,
        ),
    ];
    let polygon = Polygon {
        rings: vec![points],
        mode: PolygonMode::Fill,
        ..Default::default()
    };
    layer.add_polygon(polygon);
}

fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

struct TableLayout {
    col_width: f32,
    max_chars: usize,
}

impl TableLayout {
    fn new(column_count: usize) -> Self {
        let content_width = PAGE_WIDTH - 2.0 * MARGIN;
        let col_width = content_width / column_count.max(1) as f32;
        let max_chars = ((col_width - 2.0 * CELL_PADDING) / CHAR_WIDTH).floor() as usize;
        TableLayout {
            col_width,
            max_chars: max_chars.max(1),
        }
    }

    fn cell_left(&self, col: usize) -> f32 {
        MARGIN + col as f32 * self.col_width + CELL_PADDING
    }

    fn cell_right(&self, col: usize) -> f32 {
        MARGIN + (col + 1) as f32 * self.col_width - CELL_PADDING
    }
}

fn draw_header_row(
    layer: &PdfLayerReference,
    table: &ExportTable,
    layout: &TableLayout,
    bold: &IndirectFontRef,
    y: f32,
) {
    fill_band(layer, y, header_fill());
    layer.set_fill_color(white());
    for (col, column) in table.columns.iter().enumerate() {
        let text = truncated(column.name, layout.max_chars);
        layer.use_text(text, CELL_SIZE, Mm(layout.cell_left(col)), Mm(y), bold);
    }
    layer.set_fill_color(black());
}

fn draw_data_row(
    layer: &PdfLayerReference,
    row: &[FieldValue],
    layout: &TableLayout,
    font: &IndirectFontRef,
    y: f32,
    shaded: bool,
) {
    if shaded {
        fill_band(layer, y, stripe_fill());
        layer.set_fill_color(black());
    }
    for (col, value) in row.iter().enumerate() {
        let text = truncated(&value.display(), layout.max_chars);
        // Numeric cells right-align on the approximate glyph advance
        let x = match value {
            FieldValue::Count(_) => {
                layout.cell_right(col) - text.chars().count() as f32 * CHAR_WIDTH
            }
            FieldValue::Text(_) => layout.cell_left(col),
        };
        layer.use_text(text, CELL_SIZE, Mm(x), Mm(y), font);
    }
}

/// Renders the table to PDF bytes.
pub(crate) fn write_pdf(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        &table.title,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let layout = TableLayout::new(table.columns.len());
    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    // Title block on the first page only
    let mut y = PAGE_HEIGHT - MARGIN - 6.0;
    layer.use_text(table.title.as_str(), TITLE_SIZE, Mm(MARGIN), Mm(y), &bold);
    y -= 7.0;
    layer.use_text(
        format!("Generated on: {}", table.date.format("%Y-%m-%d")),
        META_SIZE,
        Mm(MARGIN),
        Mm(y),
        &font,
    );
    y -= 10.0;

    draw_header_row(&layer, table, &layout, &bold, y);
    y -= ROW_HEIGHT;

    for (i, row) in table.rows.iter().enumerate() {
        if y < MARGIN + ROW_HEIGHT {
            let (page, page_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
            draw_header_row(&layer, table, &layout, &bold, y);
            y -= ROW_HEIGHT;
        }
        draw_data_row(&layer, row, &layout, &font, y, i % 2 == 1);
        y -= ROW_HEIGHT;
    }

    Ok(doc.save_to_bytes()?)
}
