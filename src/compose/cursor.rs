//! The pagination cursor.
//!
//! A single mutable vertical write position threaded through every section
//! renderer. Bookkeeping is cooperative: `ensure_space` is called with a
//! block's worst-case height before drawing anything that must not straddle
//! a page boundary, and the renderer advances the cursor by exactly what it
//! drew.

use crate::compose::background::Background;
use crate::render::DocWriter;
use folio_types::PageMetrics;

pub(crate) struct Cursor {
    metrics: PageMetrics,
    y: f32,
}

impl Cursor {
    pub fn new(metrics: PageMetrics) -> Self {
        Self {
            metrics,
            y: metrics.content_top(),
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Breaks to a fresh page (background reapplied, cursor reset to the
    /// content top) when `height` does not fit above the bottom margin.
    /// Returns before the caller draws anything.
    pub fn ensure_space(&mut self, height: f32, writer: &mut DocWriter, background: &Background) {
        if self.y + height > self.metrics.content_bottom() {
            writer.new_page();
            background.apply(writer);
            self.y = self.metrics.content_top();
        }
    }

    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }
}
