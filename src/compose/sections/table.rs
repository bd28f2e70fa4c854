//! The line-item table.
//!
//! One header row, then one block per item in input order. Thumbnails come
//! from the cache only; the composer preloads them as a batch, so drawing
//! never suspends mid-row. Row height is measured from the row's actual
//! content: dimensions and a customization note each add a trailing line.

use crate::compose::Frame;
use crate::compose::sections::{ACCENT, BAND, INK, MUTED, RULE, draw_placeholder};
use crate::compose::text::{format_money, format_number, truncate};
use crate::raster::ImageCache;
use crate::render::FontStyle;
use folio_types::{Discount, LineItem, PageMetrics, Rect, Size};

const THUMB: f32 = 36.0;
const ROW_PAD: f32 = 4.0;
const BASE_ROW_HEIGHT: f32 = THUMB + 2.0 * ROW_PAD;
const EXTRA_LINE: f32 = 11.0;
const HEADER_HEIGHT: f32 = 16.0;
const HEADER_GAP: f32 = 20.0;
const NAME_BUDGET: usize = 38;
const DESC_BUDGET: usize = 52;
const NOTE_BUDGET: usize = 72;

struct Columns {
    thumb_x: f32,
    name_x: f32,
    qty_right: f32,
    unit_right: f32,
    total_right: f32,
}

fn columns(page: &PageMetrics) -> Columns {
    let left = page.content_left();
    let right = page.content_right();
    Columns {
        thumb_x: left,
        name_x: left + THUMB + 10.0,
        qty_right: right - 156.0,
        unit_right: right - 80.0,
        total_right: right,
    }
}

pub(crate) fn render(frame: &mut Frame<'_>, cache: &ImageCache, items: &[LineItem]) {
    let cols = columns(&frame.config.page);
    draw_header_row(frame, &cols);
    for item in items {
        draw_row(frame, cache, &cols, item);
    }
}

fn draw_header_row(frame: &mut Frame<'_>, cols: &Columns) {
    // Keep the header attached to at least the first row.
    frame.cursor.ensure_space(
        HEADER_GAP + BASE_ROW_HEIGHT,
        frame.writer,
        frame.background,
    );

    let page = frame.config.page;
    let y = frame.cursor.y();
    frame.writer.fill_rect(
        Rect::new(page.content_left(), y, page.content_width(), HEADER_HEIGHT),
        BAND,
    );

    let label_y = y + 3.5;
    frame
        .writer
        .text(cols.thumb_x + 2.0, label_y, "Image", FontStyle::Bold, 8.5, INK);
    frame
        .writer
        .text(cols.name_x, label_y, "Product", FontStyle::Bold, 8.5, INK);
    frame
        .writer
        .text_right(cols.qty_right, label_y, "Qty", FontStyle::Bold, 8.5, INK);
    frame
        .writer
        .text_right(cols.unit_right, label_y, "Unit price", FontStyle::Bold, 8.5, INK);
    frame
        .writer
        .text_right(cols.total_right, label_y, "Total", FontStyle::Bold, 8.5, INK);

    frame.cursor.advance(HEADER_GAP);
}

fn row_height(item: &LineItem) -> f32 {
    let mut height = BASE_ROW_HEIGHT;
    if item.dimensions.is_some() {
        height += EXTRA_LINE;
    }
    if customization_note(item).is_some() {
        height += EXTRA_LINE;
    }
    height
}

fn customization_note(item: &LineItem) -> Option<String> {
    let customization = item.customization.as_ref()?;
    let description = customization.description.as_deref()?;
    Some(match customization.adjustment {
        Some(Discount::Percentage(pct)) => {
            format!("Customization (+{}%): {}", format_number(pct), description)
        }
        Some(Discount::Flat(value)) => format!("Customization (+{:.2}): {}", value, description),
        None => format!("Customization: {}", description),
    })
}

fn draw_row(frame: &mut Frame<'_>, cache: &ImageCache, cols: &Columns, item: &LineItem) {
    let height = row_height(item);
    frame
        .cursor
        .ensure_space(height, frame.writer, frame.background);
    let top = frame.cursor.y();

    let thumb_box = Rect::new(cols.thumb_x, top + ROW_PAD, THUMB, THUMB);
    match item.thumbnail_url.as_deref().and_then(|url| cache.get(url)) {
        Some(raster) => {
            let fitted = raster.size().scale_to_fit(Size::new(THUMB, THUMB));
            let rect = Rect::new(
                thumb_box.x + (THUMB - fitted.width) / 2.0,
                thumb_box.y + (THUMB - fitted.height) / 2.0,
                fitted.width,
                fitted.height,
            );
            let name = frame.writer.register_image(raster.as_ref());
            frame.writer.image(&name, rect);
        }
        None => draw_placeholder(frame.writer, thumb_box),
    }

    let text_y = top + ROW_PAD;
    frame.writer.text(
        cols.name_x,
        text_y,
        &truncate(&item.name, NAME_BUDGET),
        FontStyle::Regular,
        10.0,
        INK,
    );
    if let Some(description) = &item.description {
        frame.writer.text(
            cols.name_x,
            text_y + 13.0,
            &truncate(description, DESC_BUDGET),
            FontStyle::Regular,
            8.0,
            MUTED,
        );
    }

    let symbol = &frame.config.currency_symbol;
    frame.writer.text_right(
        cols.qty_right,
        text_y,
        &item.quantity.to_string(),
        FontStyle::Regular,
        10.0,
        INK,
    );
    frame.writer.text_right(
        cols.unit_right,
        text_y,
        &format_money(symbol, item.unit_price),
        FontStyle::Regular,
        10.0,
        INK,
    );
    frame.writer.text_right(
        cols.total_right,
        text_y,
        &format_money(symbol, item.total_price),
        FontStyle::Regular,
        10.0,
        INK,
    );

    let mut extra_y = top + BASE_ROW_HEIGHT - 2.0;
    if let Some(dimensions) = &item.dimensions {
        frame.writer.text(
            cols.name_x,
            extra_y,
            &dimensions.to_string(),
            FontStyle::Regular,
            8.0,
            MUTED,
        );
        extra_y += EXTRA_LINE;
    }
    if let Some(note) = customization_note(item) {
        frame.writer.text(
            cols.name_x,
            extra_y,
            &truncate(&note, NOTE_BUDGET),
            FontStyle::Regular,
            8.0,
            ACCENT,
        );
    }

    let rule_y = top + height - 1.0;
    frame.writer.line(
        frame.config.page.content_left(),
        rule_y,
        frame.config.page.content_right(),
        rule_y,
        RULE,
        0.5,
    );

    frame.cursor.advance(height);
}
