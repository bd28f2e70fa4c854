//! Payment and shipping terms. Skipped entirely unless a method is present;
//! each detail line appears only when its field does.

use crate::compose::Frame;
use crate::compose::sections::{INK, MUTED};
use crate::compose::text::format_money;
use crate::render::FontStyle;
use folio_types::DocumentRecord;

const HEADING_ADVANCE: f32 = 15.0;
const LINE_ADVANCE: f32 = 11.0;
const SECTION_GAP: f32 = 10.0;

pub(crate) fn render(frame: &mut Frame<'_>, record: &DocumentRecord) {
    if record.payment.is_none() && record.shipping.is_none() {
        return;
    }
    let symbol = &frame.config.currency_symbol;

    let mut lines: Vec<String> = Vec::new();
    if let Some(payment) = &record.payment {
        lines.push(format!("Payment: {}", payment.method));
        if let Some(installments) = payment.installments {
            lines.push(format!("Installments: {}x", installments));
        }
        if let Some(down_payment) = payment.down_payment {
            lines.push(format!("Down payment: {}", format_money(symbol, down_payment)));
        }
        if let Some(remaining) = payment.remaining {
            lines.push(format!(
                "Remaining balance: {}",
                format_money(symbol, remaining)
            ));
        }
        if let Some(interest) = payment.card_interest {
            lines.push(format!("Card interest: {}", format_money(symbol, interest)));
        }
    }
    if let Some(shipping) = &record.shipping {
        match shipping.cost {
            Some(cost) => lines.push(format!(
                "Shipping ({}): {}",
                shipping.method,
                format_money(symbol, cost)
            )),
            None => lines.push(format!("Shipping: {}", shipping.method)),
        }
    }

    let height = HEADING_ADVANCE + LINE_ADVANCE * lines.len() as f32 + SECTION_GAP;
    frame
        .cursor
        .ensure_space(height, frame.writer, frame.background);

    let left = frame.config.page.content_left();
    let mut y = frame.cursor.y();
    frame
        .writer
        .text(left, y, "Payment & shipping", FontStyle::Bold, 10.0, INK);
    y += HEADING_ADVANCE;
    for line in &lines {
        frame.writer.text(left, y, line, FontStyle::Regular, 9.0, MUTED);
        y += LINE_ADVANCE;
    }

    frame.cursor.advance(height);
}
