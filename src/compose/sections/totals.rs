//! The totals block: locally-computed subtotal, the optional discount line,
//! and the upstream-authoritative grand total, printed verbatim.

use crate::compose::Frame;
use crate::compose::sections::{ACCENT, INK, MUTED, RULE};
use crate::compose::text::{format_money, format_number};
use crate::render::FontStyle;
use folio_types::{Color, Discount, DocumentRecord};

const LABEL_OFFSET: f32 = 170.0;
const LINE_ADVANCE: f32 = 13.0;
const TOTAL_ADVANCE: f32 = 18.0;
const SECTION_GAP: f32 = 12.0;

struct TotalLine {
    label: String,
    amount: String,
    style: FontStyle,
    size: f32,
    color: Color,
    advance: f32,
}

pub(crate) fn render(frame: &mut Frame<'_>, record: &DocumentRecord) {
    let symbol = &frame.config.currency_symbol;
    let subtotal = record.subtotal();

    let mut lines = vec![TotalLine {
        label: "Subtotal".to_string(),
        amount: format_money(symbol, subtotal),
        style: FontStyle::Regular,
        size: 9.5,
        color: MUTED,
        advance: LINE_ADVANCE,
    }];

    if let Some(discount) = record.discount {
        let label = match discount {
            Discount::Percentage(pct) => format!("Discount ({}%)", format_number(pct)),
            Discount::Flat(_) => "Discount".to_string(),
        };
        lines.push(TotalLine {
            label,
            amount: format!("-{}", format_money(symbol, discount.amount_for(subtotal))),
            style: FontStyle::Bold,
            size: 9.5,
            color: ACCENT,
            advance: LINE_ADVANCE,
        });
    }

    // The grand total is the record's figure, never recomputed here.
    lines.push(TotalLine {
        label: "Total".to_string(),
        amount: format_money(symbol, record.total_value),
        style: FontStyle::Bold,
        size: 12.0,
        color: INK,
        advance: TOTAL_ADVANCE,
    });

    let height: f32 = lines.iter().map(|line| line.advance).sum::<f32>() + 6.0;
    frame
        .cursor
        .ensure_space(height + SECTION_GAP, frame.writer, frame.background);

    let right = frame.config.page.content_right();
    let label_x = right - LABEL_OFFSET;
    let mut y = frame.cursor.y() + 4.0;
    let last = lines.len() - 1;
    for (index, line) in lines.iter().enumerate() {
        if index == last {
            frame.writer.line(label_x, y - 2.0, right, y - 2.0, RULE, 0.75);
            y += 3.0;
        }
        frame
            .writer
            .text(label_x, y, &line.label, line.style, line.size, line.color);
        frame
            .writer
            .text_right(right, y, &line.amount, line.style, line.size, line.color);
        y += line.advance;
    }

    frame.cursor.advance(height + SECTION_GAP);
}
