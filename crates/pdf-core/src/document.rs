//! PDF Document wrapper

use crate::font::{BuiltinFont, FontObjects};
use crate::text::{encode_winansi_hex, generate_text_operators, TextRenderContext};
use crate::{Align, FontData, PdfError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Red color
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    /// Green color
    pub fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }

    /// Blue color
    pub fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Single-page PDF document built from scratch at fixed dimensions
///
/// Text operators are buffered as they are inserted and flushed into the page
/// content stream at save time, together with the font dictionaries for the
/// fonts actually used. Output contains no timestamps or file identifiers, so
/// identical inputs produce byte-identical documents.
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// Page object ID
    page_id: ObjectId,
    /// Content stream object ID
    contents_id: ObjectId,
    /// Page width in points
    width: f64,
    /// Page height in points
    height: f64,
    /// Registered fonts
    fonts: HashMap<String, FontData>,
    /// Current font name
    current_font: Option<String>,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    /// Page font resources (font name -> resource name), insertion-ordered
    font_resources: Vec<(String, String)>,
    /// Next font resource number
    next_font_resource: u32,
    /// Buffered content operators (flushed at save time)
    content_buffer: Vec<u8>,
}

impl PdfDocument {
    /// Create a new single-page document
    ///
    /// The built-in Courier faces are pre-registered under the names
    /// "courier", "courier-bold", "courier-oblique" and "courier-boldoblique".
    ///
    /// # Arguments
    /// * `width` - Page width in points
    /// * `height` - Page height in points
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PdfError::InvalidDimensions(width, height));
        }

        let mut inner = Document::with_version("1.5");

        let contents_id = inner.add_object(Stream::new(Dictionary::new(), Vec::new()));

        let pages_id = inner.new_object_id();

        let page_dict = Dictionary::from_iter(vec![
            ("Type", "Page".into()),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                vec![0.into(), 0.into(), width.into(), height.into()].into(),
            ),
            ("Contents", Object::Reference(contents_id)),
        ]);
        let page_id = inner.add_object(page_dict);

        let pages_dict = Dictionary::from_iter(vec![
            ("Type", "Pages".into()),
            ("Kids", vec![Object::Reference(page_id)].into()),
            ("Count", 1.into()),
        ]);
        inner.objects.insert(pages_id, pages_dict.into());

        let catalog_dict = Dictionary::from_iter(vec![
            ("Type", "Catalog".into()),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = inner.add_object(catalog_dict);
        inner.trailer.set("Root", Object::Reference(catalog_id));

        let mut fonts = HashMap::new();
        for (name, builtin) in [
            ("courier", BuiltinFont::Courier),
            ("courier-bold", BuiltinFont::CourierBold),
            ("courier-oblique", BuiltinFont::CourierOblique),
            ("courier-boldoblique", BuiltinFont::CourierBoldOblique),
        ] {
            fonts.insert(name.to_string(), FontData::from_builtin(name, builtin));
        }

        Ok(Self {
            inner,
            page_id,
            contents_id,
            width,
            height,
            fonts,
            current_font: None,
            current_font_size: 12.0,
            current_text_color: Color::default(),
            font_resources: Vec::new(),
            next_font_resource: 1,
            content_buffer: Vec::new(),
        })
    }

    /// Page width in points
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page height in points
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Register a TrueType font
    ///
    /// # Arguments
    /// * `name` - Font identifier (used in set_font)
    /// * `ttf_data` - TrueType font file bytes
    pub fn register_font(&mut self, name: &str, ttf_data: &[u8]) -> Result<()> {
        if self.fonts.contains_key(name) {
            return Err(PdfError::FontAlreadyExists(name.to_string()));
        }

        let font_data = FontData::from_ttf(name, ttf_data)?;
        self.fonts.insert(name.to_string(), font_data);

        Ok(())
    }

    /// Whether a font is registered under the given name
    pub fn has_font(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Set the current font and size
    ///
    /// # Arguments
    /// * `name` - Font identifier
    /// * `size` - Font size in points
    pub fn set_font(&mut self, name: &str, size: f32) -> Result<()> {
        if !self.fonts.contains_key(name) {
            return Err(PdfError::FontNotFound(name.to_string()));
        }

        self.current_font = Some(name.to_string());
        self.current_font_size = size;

        Ok(())
    }

    /// Set only the font size (keeps current font)
    ///
    /// # Arguments
    /// * `size` - Font size in points
    pub fn set_font_size(&mut self, size: f32) -> Result<()> {
        if self.current_font.is_none() {
            return Err(PdfError::FontNotFound("No font set".to_string()));
        }

        self.current_font_size = size;
        Ok(())
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Get current font data
    fn current_font_data(&self) -> Result<&FontData> {
        let name = self
            .current_font
            .as_ref()
            .ok_or_else(|| PdfError::FontNotFound("No font set".to_string()))?;
        self.fonts
            .get(name)
            .ok_or_else(|| PdfError::FontNotFound(name.clone()))
    }

    /// Measure text width in points at the current font and size
    ///
    /// # Arguments
    /// * `text` - The text to measure
    pub fn text_width(&self, text: &str) -> Result<f64> {
        let font_data = self.current_font_data()?;
        Ok(font_data.text_width_points(text, self.current_font_size) as f64)
    }

    /// Measure text width in points for a named font at an explicit size
    ///
    /// Does not touch the current font state.
    pub fn measure_text(&self, font: &str, text: &str, size: f32) -> Result<f64> {
        let font_data = self
            .fonts
            .get(font)
            .ok_or_else(|| PdfError::FontNotFound(font.to_string()))?;
        Ok(font_data.text_width_points(text, size) as f64)
    }

    /// Insert text at a specific position
    ///
    /// The Y coordinate is measured from the top of the page; it is converted
    /// to the PDF bottom-origin internally.
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate in points (from top)
    /// * `align` - Text alignment
    pub fn insert_text(&mut self, text: &str, x: f64, y: f64, align: Align) -> Result<()> {
        // Nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let font_name = self
            .current_font
            .clone()
            .ok_or_else(|| PdfError::FontNotFound("No font set".to_string()))?;

        let text_width = self.text_width(text)?;
        let text_hex = encode_winansi_hex(text);

        let font_resource_name = self.get_or_create_font_ref(&font_name);

        let pdf_y = self.height - y;

        let ctx = TextRenderContext {
            font_name: font_resource_name,
            font_size: self.current_font_size,
            text_width,
            color: self.current_text_color,
        };

        let operators = generate_text_operators(&text_hex, x, pdf_y, align, &ctx);
        self.content_buffer.extend_from_slice(&operators);

        Ok(())
    }

    /// Get or create a font resource name (e.g., "F1", "F2") for a font
    fn get_or_create_font_ref(&mut self, font_name: &str) -> String {
        if let Some((_, resource)) = self
            .font_resources
            .iter()
            .find(|(name, _)| name == font_name)
        {
            return resource.clone();
        }

        let resource_name = format!("F{}", self.next_font_resource);
        self.next_font_resource += 1;

        self.font_resources
            .push((font_name.to_string(), resource_name.clone()));

        resource_name
    }

    /// Save the document to a file
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.flush_content_buffer()?;
        self.embed_fonts()?;

        self.inner
            .save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.flush_content_buffer()?;
        self.embed_fonts()?;

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Append buffered operators to the page content stream
    fn flush_content_buffer(&mut self) -> Result<()> {
        if self.content_buffer.is_empty() {
            return Ok(());
        }

        let content = std::mem::take(&mut self.content_buffer);

        let stream = self
            .inner
            .get_object_mut(self.contents_id)?
            .as_stream_mut()?;
        stream.content.extend_from_slice(&content);
        stream
            .dict
            .set("Length", Object::Integer(stream.content.len() as i64));

        Ok(())
    }

    /// Embed the fonts referenced by the content into the page resources
    fn embed_fonts(&mut self) -> Result<()> {
        if self.font_resources.is_empty() {
            return Ok(());
        }

        let resources: Vec<(String, String)> = std::mem::take(&mut self.font_resources);

        let mut font_dict = Dictionary::new();
        for (font_name, resource_name) in &resources {
            let font_data = self
                .fonts
                .get(font_name)
                .ok_or_else(|| PdfError::FontNotFound(font_name.clone()))?;

            let font_id = match font_data.to_pdf_objects() {
                FontObjects::Builtin(font) => self.inner.add_object(font),
                FontObjects::TrueType {
                    mut font,
                    mut descriptor,
                    font_file,
                } => {
                    let font_file_id = self.inner.add_object(font_file);
                    descriptor.set("FontFile2", Object::Reference(font_file_id));
                    let descriptor_id = self.inner.add_object(descriptor);
                    font.set("FontDescriptor", Object::Reference(descriptor_id));
                    self.inner.add_object(font)
                }
            };

            font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
        }

        let page_dict = self.inner.get_object_mut(self.page_id)?.as_dict_mut()?;

        let mut resources_dict = match page_dict.get(b"Resources").and_then(Object::as_dict) {
            Ok(dict) => dict.clone(),
            Err(_) => Dictionary::new(),
        };
        resources_dict.set("Font", Object::Dictionary(font_dict));
        page_dict.set("Resources", Object::Dictionary(resources_dict));

        Ok(())
    }

    /// Get a reference to the underlying lopdf document
    pub fn inner(&self) -> &Document {
        &self.inner
    }
}
