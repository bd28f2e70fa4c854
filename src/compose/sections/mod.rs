//! The ordered content sections of the rendered document.
//!
//! Drawing order is fixed by the composer: header, parties, line-item table,
//! totals, payment/shipping, notes, gallery. The branch box is not part of
//! the flow; it is pinned to absolute coordinates on page one.

pub(crate) mod branch_box;
pub(crate) mod gallery;
pub(crate) mod header;
pub(crate) mod notes;
pub(crate) mod parties;
pub(crate) mod payment;
pub(crate) mod table;
pub(crate) mod totals;

use crate::render::DocWriter;
use folio_types::{Color, Rect};

// Shared palette.
pub(crate) const INK: Color = Color::gray(25);
pub(crate) const MUTED: Color = Color::gray(105);
pub(crate) const RULE: Color = Color::gray(200);
pub(crate) const BAND: Color = Color::gray(235);
pub(crate) const ACCENT: Color = Color::new(165, 42, 42);

/// Neutral region drawn where an image failed to load or was never given.
pub(crate) fn draw_placeholder(writer: &mut DocWriter, rect: Rect) {
    writer.fill_rect(rect, Color::gray(228));
    writer.stroke_rect(rect, Color::gray(170), 0.5);
}
