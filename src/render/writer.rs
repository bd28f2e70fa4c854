//! Low-level PDF assembly on top of `lopdf`.
//!
//! The writer accumulates content-stream operations per page in top-down
//! coordinates (converted to PDF's bottom-up Y at emission), keeps one
//! document-global resources dictionary (two base-14 fonts plus every
//! registered raster), and serializes the whole document on `finish`.

use crate::raster::DecodedImage;
use folio_types::{Color, PageMetrics, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::io::Cursor;

/// Average Helvetica advance as a fraction of the font size. The engine
/// never measures glyphs; right alignment and truncation budgets work off
/// this estimate.
const AVG_GLYPH_ADVANCE: f32 = 0.5;

pub(crate) fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_ADVANCE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    fn resource_name(self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"F1",
            FontStyle::Bold => b"F2",
        }
    }
}

pub(crate) struct DocWriter {
    doc: Document,
    pages_id: ObjectId,
    regular_font_id: ObjectId,
    bold_font_id: ObjectId,
    xobjects: Vec<(String, ObjectId)>,
    pages: Vec<Vec<Operation>>,
    metrics: PageMetrics,
}

impl DocWriter {
    pub fn new(metrics: PageMetrics) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let regular_font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        Self {
            doc,
            pages_id,
            regular_font_id,
            bold_font_id,
            xobjects: Vec::new(),
            pages: Vec::new(),
            metrics,
        }
    }

    pub fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Registers a decoded raster as a DeviceRGB image XObject and returns
    /// the resource name to draw it with.
    pub fn register_image(&mut self, image: &DecodedImage) -> String {
        let name = format!("Im{}", self.xobjects.len() + 1);
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        let id = self
            .doc
            .add_object(Object::Stream(Stream::new(dict, image.data.clone())));
        self.xobjects.push((name.clone(), id));
        name
    }

    /// Draws a single line of text. `y` is the top of the line box.
    pub fn text(&mut self, x: f32, y: f32, content: &str, style: FontStyle, size: f32, color: Color) {
        if content.trim().is_empty() {
            return;
        }
        let pdf_y = self.metrics.height - (y + size * 0.8);
        let encoded = to_win_ansi(content);
        let ops = self.current_page();
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(style.resource_name().to_vec()), size.into()],
        ));
        push_rg(ops, "rg", color);
        ops.push(Operation::new("Td", vec![x.into(), pdf_y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encoded, StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    /// Draws text so it ends at `right_x`, using the estimated advance.
    pub fn text_right(
        &mut self,
        right_x: f32,
        y: f32,
        content: &str,
        style: FontStyle,
        size: f32,
        color: Color,
    ) {
        self.text(right_x - text_width(content, size), y, content, style, size, color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let pdf_y = self.metrics.height - (rect.y + rect.height);
        let ops = self.current_page();
        push_rg(ops, "rg", color);
        ops.push(Operation::new(
            "re",
            vec![rect.x.into(), pdf_y.into(), rect.width.into(), rect.height.into()],
        ));
        ops.push(Operation::new("f", vec![]));
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let pdf_y = self.metrics.height - (rect.y + rect.height);
        let ops = self.current_page();
        push_rg(ops, "RG", color);
        ops.push(Operation::new("w", vec![width.into()]));
        ops.push(Operation::new(
            "re",
            vec![rect.x.into(), pdf_y.into(), rect.width.into(), rect.height.into()],
        ));
        ops.push(Operation::new("S", vec![]));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        let page_height = self.metrics.height;
        let ops = self.current_page();
        push_rg(ops, "RG", color);
        ops.push(Operation::new("w", vec![width.into()]));
        ops.push(Operation::new("m", vec![x1.into(), (page_height - y1).into()]));
        ops.push(Operation::new("l", vec![x2.into(), (page_height - y2).into()]));
        ops.push(Operation::new("S", vec![]));
    }

    /// Paints a registered image XObject into `rect` (top-down coordinates).
    pub fn image(&mut self, name: &str, rect: Rect) {
        let pdf_y = self.metrics.height - (rect.y + rect.height);
        let ops = self.current_page();
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![
                rect.width.into(),
                0.0_f32.into(),
                0.0_f32.into(),
                rect.height.into(),
                rect.x.into(),
                pdf_y.into(),
            ],
        ));
        ops.push(Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]));
        ops.push(Operation::new("Q", vec![]));
    }

    /// Builds the page tree and catalog, compresses streams and serializes.
    pub fn finish(mut self) -> Result<Vec<u8>, lopdf::Error> {
        let font_dict = dictionary! {
            "F1" => self.regular_font_id,
            "F2" => self.bold_font_id,
        };
        let mut resources = dictionary! { "Font" => font_dict };
        if !self.xobjects.is_empty() {
            let mut xobject_dict = lopdf::Dictionary::new();
            for (name, id) in &self.xobjects {
                xobject_dict.set(name.clone().into_bytes(), Object::Reference(*id));
            }
            resources.set("XObject", Object::Dictionary(xobject_dict));
        }
        let resources_id = self.doc.add_object(resources);

        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let pages = std::mem::take(&mut self.pages);
        let mut kids: Vec<Object> = Vec::new();
        for operations in pages {
            let content = Content { operations };
            let stream_id = self.doc.add_object(Object::Stream(Stream::new(
                lopdf::Dictionary::new(),
                content.encode()?,
            )));
            let page_id = self.doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => self.pages_id,
                "MediaBox" => vec![0.0.into(), 0.0.into(), self.metrics.width.into(), self.metrics.height.into()],
                "Contents" => stream_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.compress();

        let mut buffer = Cursor::new(Vec::new());
        self.doc.save_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    fn current_page(&mut self) -> &mut Vec<Operation> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

fn push_rg(ops: &mut Vec<Operation>, operator: &str, color: Color) {
    ops.push(Operation::new(
        operator,
        vec![
            (color.r as f32 / 255.0).into(),
            (color.g as f32 / 255.0).into(),
            (color.b as f32 / 255.0).into(),
        ],
    ));
}

fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
