//! Document header: title, number, generation date and the optional
//! validity/delivery dates.

use crate::compose::Frame;
use crate::compose::sections::{INK, MUTED, RULE};
use crate::render::FontStyle;
use chrono::Local;
use folio_types::DocumentRecord;

pub(crate) fn render(frame: &mut Frame<'_>, record: &DocumentRecord) {
    let left = frame.config.page.content_left();
    let right = frame.config.page.content_right();

    let mut height = 24.0 + 13.0 + 10.0;
    if record.valid_until.is_some() {
        height += 12.0;
    }
    if record.delivery_deadline.is_some() {
        height += 12.0;
    }
    frame
        .cursor
        .ensure_space(height, frame.writer, frame.background);

    let top = frame.cursor.y();
    let mut y = top;

    let title = record
        .title
        .as_deref()
        .unwrap_or(&frame.config.document_title);
    frame.writer.text(left, y, title, FontStyle::Bold, 16.0, INK);
    y += 24.0;

    let issued = record
        .issued_on
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let reference = format!("No. {} \u{b7} {}", record.number, issued);
    frame
        .writer
        .text(left, y, &reference, FontStyle::Regular, 9.0, MUTED);
    y += 13.0;

    if let Some(valid_until) = &record.valid_until {
        let line = format!("Valid until {}", valid_until);
        frame.writer.text(left, y, &line, FontStyle::Regular, 9.0, MUTED);
        y += 12.0;
    }
    if let Some(deadline) = &record.delivery_deadline {
        let line = format!("Delivery by {}", deadline);
        frame.writer.text(left, y, &line, FontStyle::Regular, 9.0, MUTED);
        y += 12.0;
    }

    frame.writer.line(left, y + 2.0, right, y + 2.0, RULE, 0.75);
    y += 10.0;

    frame.cursor.advance(y - top);
}
