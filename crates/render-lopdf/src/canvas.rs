use crate::page::PageContent;
use fee_report_render_core::{Canvas, ImageData, PaintMode, RenderError};
use fee_report_style::{BuiltinFont, PageSize};
use fee_report_types::{Color, Rect, Size};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;
use std::path::Path;

const DEFAULT_FONT_SIZE: f32 = 12.0;

/// An in-memory PDF canvas using the `lopdf` library.
///
/// Pages are recorded as content streams while drawing; the object graph
/// (fonts, images, page tree, catalog) is assembled by [`LopdfCanvas::finish`].
/// No timestamps or random IDs are written, so the output is byte-for-byte
/// reproducible.
pub struct LopdfCanvas {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_size: Size,
    pages: Vec<PageContent>,
    font: BuiltinFont,
    font_size: f32,
    images: Vec<(String, ObjectId)>,
    title: Option<String>,
}

impl LopdfCanvas {
    pub fn new(page_size: PageSize) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        Self {
            document,
            pages_id,
            resources_id,
            page_size: page_size.size(),
            pages: vec![PageContent::new()],
            font: BuiltinFont::Helvetica,
            font_size: DEFAULT_FONT_SIZE,
            images: Vec::new(),
            title: None,
        }
    }

    /// Sets the document title written to the Info dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn font_resource_name(font: BuiltinFont) -> &'static str {
        match font {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
        }
    }

    fn current_page(&mut self) -> &mut PageContent {
        if self.pages.is_empty() {
            self.pages.push(PageContent::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn compress(data: &[u8]) -> Result<Vec<u8>, RenderError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data)?;
        Ok(encoder.finish()?)
    }

    fn font_dictionary() -> Dictionary {
        let mut fonts = Dictionary::new();
        for font in BuiltinFont::ALL {
            fonts.set(
                Self::font_resource_name(font),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.postscript_name(),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }
        fonts
    }

    /// Writes the page tree and catalog and serializes the document.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let mut page_ids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let compressed = Self::compress(&page.encode()?)?;
            let content_stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed);
            let content_id = self.document.add_object(content_stream);

            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => self.pages_id,
                "MediaBox" => vec![0.into(), 0.into(), self.page_size.width.into(), self.page_size.height.into()],
                "Contents" => content_id,
                "Resources" => self.resources_id,
            };
            page_ids.push(self.document.add_object(page_dict));
        }

        let mut resources = dictionary! { "Font" => Self::font_dictionary() };
        if !self.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, id) in &self.images {
                xobjects.set(name.as_bytes().to_vec(), Object::Reference(*id));
            }
            resources.set("XObject", xobjects);
        }
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        let mut info = dictionary! { "Producer" => Object::string_literal("fee-report") };
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        let info_id = self.document.add_object(info);
        self.document.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        self.document.save_to(&mut buffer)?;
        log::debug!(
            "Serialized PDF with {} page(s), {} bytes",
            page_ids.len(),
            buffer.len()
        );
        Ok(buffer)
    }

    /// Finishes the document and writes it to `path`, returning the byte length.
    pub fn save(self, path: impl AsRef<Path>) -> Result<usize, RenderError> {
        let bytes = self.finish()?;
        std::fs::write(path.as_ref(), &bytes)?;
        Ok(bytes.len())
    }
}

impl Canvas for LopdfCanvas {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn set_font(&mut self, font: BuiltinFont, size: f32) {
        self.font = font;
        self.font_size = size;
    }

    fn font(&self) -> (BuiltinFont, f32) {
        (self.font, self.font_size)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.current_page().set_fill_color(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.current_page().set_stroke_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.current_page().set_line_width(width);
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        let resource = Self::font_resource_name(self.font);
        let size = self.font_size;
        self.current_page().text(resource, size, x, y, text);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.current_page().line(x1, y1, x2, y2);
    }

    fn rect(&mut self, rect: Rect, mode: PaintMode) {
        self.current_page().rect(rect, mode);
    }

    fn draw_image(&mut self, image: &ImageData, frame: Rect) -> Result<(), RenderError> {
        let expected = (image.width as usize) * (image.height as usize) * 3;
        if image.rgb.len() != expected {
            return Err(RenderError::ImageBuffer {
                width: image.width,
                height: image.height,
                expected,
                actual: image.rgb.len(),
            });
        }

        let mut image_dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        if let Some(alpha) = &image.alpha {
            let mask = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => image.width as i64,
                    "Height" => image.height as i64,
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                    "Filter" => "FlateDecode",
                },
                Self::compress(alpha)?,
            );
            let mask_id = self.document.add_object(mask);
            image_dict.set("SMask", mask_id);
        }
        let image_id = self
            .document
            .add_object(Stream::new(image_dict, Self::compress(&image.rgb)?));

        let name = format!("Im{}", self.images.len() + 1);
        self.current_page().image(&name, frame);
        self.images.push((name, image_id));
        Ok(())
    }

    fn show_page(&mut self) {
        self.pages.push(PageContent::new());
        self.font = BuiltinFont::Helvetica;
        self.font_size = DEFAULT_FONT_SIZE;
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
