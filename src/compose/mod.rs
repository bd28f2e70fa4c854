//! Document composition: cursor-driven pagination plus the ordered section
//! renderers that lay an order/quote record out onto the page.

pub(crate) mod background;
pub mod composer;
pub(crate) mod cursor;
pub(crate) mod sections;
pub(crate) mod text;

use crate::compose::background::Background;
use crate::compose::cursor::Cursor;
use crate::config::ComposerConfig;
use crate::render::DocWriter;

/// Everything a section renderer needs: the drawing surface, the shared
/// pagination cursor, the background to reapply on page breaks, and the
/// static configuration. Sections draw, then advance the cursor by exactly
/// the height they consumed.
pub(crate) struct Frame<'a> {
    pub writer: &'a mut DocWriter,
    pub cursor: &'a mut Cursor,
    pub background: &'a Background,
    pub config: &'a ComposerConfig,
}
