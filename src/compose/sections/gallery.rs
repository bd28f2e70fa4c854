//! The customization photo gallery.
//!
//! One block per line item that carries a photo: product name, optional
//! note, and the photo fitted into a fixed bounding box, centered. Unlike
//! the table, photos load lazily one at a time; the section is optional and
//! sits last in the flow, so nothing downstream waits on it.

use crate::compose::Frame;
use crate::compose::sections::{INK, MUTED, draw_placeholder};
use crate::compose::text::{truncate, wrap};
use crate::raster::ImageCache;
use crate::render::FontStyle;
use folio_types::{LineItem, Rect, Size};

const PHOTO_BOX: Size = Size {
    width: 260.0,
    height: 170.0,
};
const HEADING_ADVANCE: f32 = 18.0;
const NAME_ADVANCE: f32 = 13.0;
const NOTE_ADVANCE: f32 = 11.0;
const BLOCK_GAP: f32 = 14.0;
const NAME_BUDGET: usize = 60;

pub(crate) async fn render(frame: &mut Frame<'_>, cache: &mut ImageCache, items: &[LineItem]) {
    let mut heading_drawn = false;
    for item in items {
        let Some(customization) = &item.customization else {
            continue;
        };
        let Some(url) = customization.photo_url.as_deref() else {
            continue;
        };

        let photo = cache.fetch_and_decode(url).await;

        let page = frame.config.page;
        let budget = (page.content_width() / 4.0) as usize;
        let note_lines = customization
            .description
            .as_deref()
            .map(|note| wrap(note, budget))
            .unwrap_or_default();

        let mut block_height =
            NAME_ADVANCE + NOTE_ADVANCE * note_lines.len() as f32 + PHOTO_BOX.height + BLOCK_GAP;
        if !heading_drawn {
            block_height += HEADING_ADVANCE;
        }
        frame
            .cursor
            .ensure_space(block_height, frame.writer, frame.background);

        if !heading_drawn {
            frame.writer.text(
                page.content_left(),
                frame.cursor.y(),
                "Customization photos",
                FontStyle::Bold,
                11.0,
                INK,
            );
            frame.cursor.advance(HEADING_ADVANCE);
            heading_drawn = true;
        }

        frame.writer.text(
            page.content_left(),
            frame.cursor.y(),
            &truncate(&item.name, NAME_BUDGET),
            FontStyle::Bold,
            9.5,
            INK,
        );
        frame.cursor.advance(NAME_ADVANCE);

        for line in &note_lines {
            frame.writer.text(
                page.content_left(),
                frame.cursor.y(),
                line,
                FontStyle::Regular,
                8.5,
                MUTED,
            );
            frame.cursor.advance(NOTE_ADVANCE);
        }

        let top = frame.cursor.y();
        match photo {
            Some(raster) => {
                let fitted = raster.size().scale_to_fit(PHOTO_BOX);
                let rect = Rect::new(
                    page.content_left() + (page.content_width() - fitted.width) / 2.0,
                    top + (PHOTO_BOX.height - fitted.height) / 2.0,
                    fitted.width,
                    fitted.height,
                );
                let name = frame.writer.register_image(raster.as_ref());
                frame.writer.image(&name, rect);
            }
            None => {
                let rect = Rect::new(
                    page.content_left() + (page.content_width() - PHOTO_BOX.width) / 2.0,
                    top,
                    PHOTO_BOX.width,
                    PHOTO_BOX.height,
                );
                draw_placeholder(frame.writer, rect);
            }
        }
        frame.cursor.advance(PHOTO_BOX.height + BLOCK_GAP);
    }
}
