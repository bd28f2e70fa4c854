//! Free-text notes, word-wrapped. The heading stays attached to the first
//! line; the body may flow across pages line by line.

use crate::compose::Frame;
use crate::compose::sections::{INK, MUTED};
use crate::compose::text::wrap;
use crate::render::FontStyle;

const HEADING_ADVANCE: f32 = 14.0;
const LINE_ADVANCE: f32 = 11.0;
const SECTION_GAP: f32 = 8.0;

pub(crate) fn render(frame: &mut Frame<'_>, notes: &str) {
    let page = frame.config.page;
    let budget = (page.content_width() / 4.5) as usize;
    let lines = wrap(notes, budget);
    if lines.is_empty() {
        return;
    }

    frame.cursor.ensure_space(
        HEADING_ADVANCE + LINE_ADVANCE,
        frame.writer,
        frame.background,
    );
    frame.writer.text(
        page.content_left(),
        frame.cursor.y(),
        "Notes",
        FontStyle::Bold,
        10.0,
        INK,
    );
    frame.cursor.advance(HEADING_ADVANCE);

    for line in &lines {
        frame
            .cursor
            .ensure_space(LINE_ADVANCE, frame.writer, frame.background);
        frame.writer.text(
            page.content_left(),
            frame.cursor.y(),
            line,
            FontStyle::Regular,
            9.0,
            MUTED,
        );
        frame.cursor.advance(LINE_ADVANCE);
    }

    frame.cursor.advance(SECTION_GAP);
}
