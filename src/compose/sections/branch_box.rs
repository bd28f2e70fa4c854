//! The issuing branch box, pinned to the top-right corner of page one.
//!
//! Drawn at absolute coordinates before the flowing cursor starts, and never
//! again on later pages.

use crate::compose::sections::{INK, MUTED};
use crate::compose::text::wrap;
use crate::config::ComposerConfig;
use crate::render::{DocWriter, FontStyle};
use folio_types::{Branch, Color, Rect};

const BOX_WIDTH: f32 = 190.0;
const BOX_TOP: f32 = 18.0;
const PADDING: f32 = 8.0;
const NAME_ADVANCE: f32 = 12.0;
const LINE_ADVANCE: f32 = 10.0;

pub(crate) fn render(writer: &mut DocWriter, config: &ComposerConfig, branch: &Branch) {
    let party = &branch.party;
    let budget = ((BOX_WIDTH - 2.0 * PADDING) / 4.0) as usize;

    let mut lines: Vec<(String, FontStyle, f32)> = Vec::new();
    if !party.name.is_empty() {
        lines.push((party.name.clone(), FontStyle::Bold, 9.0));
    }
    if let Some(phone) = &party.phone {
        lines.push((phone.clone(), FontStyle::Regular, 8.0));
    }
    if let Some(email) = &party.email {
        lines.push((email.clone(), FontStyle::Regular, 8.0));
    }
    if let Some(address) = &party.address {
        for segment in wrap(address, budget) {
            lines.push((segment, FontStyle::Regular, 8.0));
        }
    }
    if let Some(tax_id) = &party.tax_id {
        lines.push((format!("Tax ID: {}", tax_id), FontStyle::Regular, 8.0));
    }
    if lines.is_empty() {
        return;
    }

    let body_height: f32 = lines
        .iter()
        .map(|(_, style, _)| match style {
            FontStyle::Bold => NAME_ADVANCE,
            FontStyle::Regular => LINE_ADVANCE,
        })
        .sum();
    let rect = Rect::new(
        config.page.content_right() - BOX_WIDTH,
        BOX_TOP,
        BOX_WIDTH,
        body_height + 2.0 * PADDING,
    );

    writer.fill_rect(rect, Color::gray(244));
    writer.stroke_rect(rect, Color::gray(180), 0.5);

    let mut y = rect.y + PADDING;
    for (text, style, size) in &lines {
        let color = if *style == FontStyle::Bold { INK } else { MUTED };
        writer.text(rect.x + PADDING, y, text, *style, *size, color);
        y += match style {
            FontStyle::Bold => NAME_ADVANCE,
            FontStyle::Regular => LINE_ADVANCE,
        };
    }
}
