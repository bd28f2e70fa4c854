//! Client and counterpart blocks, side by side.
//!
//! Both columns start at the same top Y; the cursor advances by the taller
//! block's measured height, so a client with four contact lines never pushes
//! the counterpart's block down.

use crate::compose::Frame;
use crate::compose::sections::{INK, MUTED};
use crate::compose::text::wrap;
use crate::render::{DocWriter, FontStyle};
use folio_types::{Color, Party};

const GUTTER: f32 = 16.0;
const HEADING_ADVANCE: f32 = 12.0;
const NAME_ADVANCE: f32 = 13.0;
const LINE_ADVANCE: f32 = 11.0;
const SECTION_GAP: f32 = 14.0;

struct BlockLine {
    text: String,
    style: FontStyle,
    size: f32,
    color: Color,
    advance: f32,
}

pub(crate) fn render(frame: &mut Frame<'_>, client: &Party, counterpart: &Party) {
    let page = frame.config.page;
    let column_width = (page.content_width() - GUTTER) / 2.0;
    let budget = (column_width / 4.5) as usize;

    let left_lines = block_lines("Client", client, budget);
    let right_lines = block_lines("Issued by", counterpart, budget);
    let height = block_height(&left_lines).max(block_height(&right_lines));

    frame
        .cursor
        .ensure_space(height + SECTION_GAP, frame.writer, frame.background);

    let top = frame.cursor.y();
    draw_block(frame.writer, page.content_left(), top, &left_lines);
    draw_block(
        frame.writer,
        page.content_left() + column_width + GUTTER,
        top,
        &right_lines,
    );

    frame.cursor.advance(height + SECTION_GAP);
}

fn block_lines(heading: &str, party: &Party, budget: usize) -> Vec<BlockLine> {
    let mut lines = vec![
        BlockLine {
            text: heading.to_uppercase(),
            style: FontStyle::Bold,
            size: 7.5,
            color: MUTED,
            advance: HEADING_ADVANCE,
        },
        BlockLine {
            text: if party.name.is_empty() {
                "-".to_string()
            } else {
                party.name.clone()
            },
            style: FontStyle::Bold,
            size: 10.0,
            color: INK,
            advance: NAME_ADVANCE,
        },
    ];

    let mut contact = |text: String| {
        lines.push(BlockLine {
            text,
            style: FontStyle::Regular,
            size: 9.0,
            color: INK,
            advance: LINE_ADVANCE,
        });
    };
    if let Some(email) = &party.email {
        contact(email.clone());
    }
    if let Some(phone) = &party.phone {
        contact(phone.clone());
    }
    if let Some(tax_id) = &party.tax_id {
        contact(format!("Tax ID: {}", tax_id));
    }
    if let Some(address) = &party.address {
        for segment in wrap(address, budget) {
            contact(segment);
        }
    }
    lines
}

fn block_height(lines: &[BlockLine]) -> f32 {
    lines.iter().map(|line| line.advance).sum()
}

fn draw_block(writer: &mut DocWriter, x: f32, top: f32, lines: &[BlockLine]) {
    let mut y = top;
    for line in lines {
        writer.text(x, y, &line.text, line.style, line.size, line.color);
        y += line.advance;
    }
}
