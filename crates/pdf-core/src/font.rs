//! Font metrics and embedding

use crate::text::{winansi_byte, winansi_char};
use crate::{PdfError, Result};
use lopdf::{Dictionary, Object, Stream};

/// Built-in base-14 Courier faces
///
/// Courier is monospaced with a fixed 600/1000 em advance, so the whole
/// family carries its metrics in one constant and never embeds a font file.
/// Proportional faces are registered as TrueType fonts instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFont {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

/// Fixed Courier glyph advance in font units (per 1000 em)
const COURIER_ADVANCE: u16 = 600;

impl BuiltinFont {
    /// PDF BaseFont name
    pub fn base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
            BuiltinFont::CourierOblique => "Courier-Oblique",
            BuiltinFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }
}

/// TrueType face with its raw data retained for embedding
struct TtfFace {
    data: Vec<u8>,
    face: ttf_parser::Face<'static>,
}

impl std::fmt::Debug for TtfFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFace")
            .field("data_len", &self.data.len())
            .finish()
    }
}

#[derive(Debug)]
enum FontSource {
    Builtin(BuiltinFont),
    TrueType(TtfFace),
}

/// A registered font: either built-in Courier metrics or a parsed TrueType face
#[derive(Debug)]
pub struct FontData {
    /// Font identifier (used in set_font)
    pub name: String,
    source: FontSource,
}

/// PDF objects generated for embedding a font
pub(crate) enum FontObjects {
    /// Built-in fonts are a single dictionary, no file attached
    Builtin(Dictionary),
    /// TrueType fonts carry a descriptor and the raw font file
    TrueType {
        font: Dictionary,
        descriptor: Dictionary,
        font_file: Stream,
    },
}

impl FontData {
    /// Create font data for a built-in Courier face
    pub fn from_builtin(name: &str, builtin: BuiltinFont) -> Self {
        Self {
            name: name.to_string(),
            source: FontSource::Builtin(builtin),
        }
    }

    /// Create font data from TrueType bytes
    ///
    /// # Arguments
    /// * `name` - Font identifier
    /// * `ttf_data` - TrueType font file bytes
    pub fn from_ttf(name: &str, ttf_data: &[u8]) -> Result<Self> {
        let data = ttf_data.to_vec();

        // The face borrows the font bytes for the document lifetime, so the
        // buffer is leaked once at registration.
        let static_data: &'static [u8] = Box::leak(data.clone().into_boxed_slice());

        let face = ttf_parser::Face::parse(static_data, 0)
            .map_err(|e| PdfError::FontParseError(format!("{e:?}")))?;

        Ok(Self {
            name: name.to_string(),
            source: FontSource::TrueType(TtfFace { data, face }),
        })
    }

    /// Whether this font uses built-in metrics (nothing to embed as a file)
    pub fn is_builtin(&self) -> bool {
        matches!(self.source, FontSource::Builtin(_))
    }

    /// Font units per em
    fn units_per_em(&self) -> u16 {
        match &self.source {
            FontSource::Builtin(_) => 1000,
            FontSource::TrueType(ttf) => ttf.face.units_per_em(),
        }
    }

    /// Glyph advance for a character, in font units
    ///
    /// Characters outside WinAnsi measure as '?', matching how they render.
    fn char_advance(&self, c: char) -> u32 {
        let c = if winansi_byte(c).is_some() { c } else { '?' };
        match &self.source {
            FontSource::Builtin(_) => COURIER_ADVANCE as u32,
            FontSource::TrueType(ttf) => ttf
                .face
                .glyph_index(c)
                .and_then(|id| ttf.face.glyph_hor_advance(id))
                .unwrap_or(0) as u32,
        }
    }

    /// Calculate text width in font units
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().map(|c| self.char_advance(c)).sum()
    }

    /// Calculate text width in points for a given font size
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f32 {
        let width = self.text_width(text);
        let units_per_em = self.units_per_em() as f32;
        (width as f32 / units_per_em) * font_size
    }

    /// Generate the PDF objects needed to reference or embed this font
    pub(crate) fn to_pdf_objects(&self) -> FontObjects {
        match &self.source {
            FontSource::Builtin(builtin) => {
                let font = Dictionary::from_iter(vec![
                    ("Type", "Font".into()),
                    ("Subtype", "Type1".into()),
                    ("BaseFont", Object::Name(builtin.base_name().into())),
                    ("Encoding", "WinAnsiEncoding".into()),
                ]);
                FontObjects::Builtin(font)
            }
            FontSource::TrueType(ttf) => self.truetype_objects(ttf),
        }
    }

    /// Build simple /TrueType font objects with WinAnsi encoding
    ///
    /// The whole font file is embedded un-subsetted; one page with a handful
    /// of faces keeps output size a non-issue and the embedding path simple.
    fn truetype_objects(&self, ttf: &TtfFace) -> FontObjects {
        let scale = 1000.0 / ttf.face.units_per_em() as f64;
        let scaled = |v: f64| (v * scale).round() as i64;

        // /Widths covers codes 32..=255 in WinAnsi order
        let widths: Vec<Object> = (0x20..=0xFFu16)
            .map(|code| {
                let w = winansi_char(code as u8)
                    .and_then(|c| ttf.face.glyph_index(c))
                    .and_then(|id| ttf.face.glyph_hor_advance(id))
                    .map(|adv| scaled(adv as f64))
                    .unwrap_or(0);
                w.into()
            })
            .collect();

        let ascent = scaled(ttf.face.ascender() as f64);
        let descent = scaled(ttf.face.descender() as f64);
        let font_name = Object::Name(self.name.clone().into());

        let descriptor = Dictionary::from_iter(vec![
            ("Type", "FontDescriptor".into()),
            ("FontName", font_name.clone()),
            ("Flags", 32.into()), // Nonsymbolic
            (
                "FontBBox",
                vec![0.into(), descent.into(), 1000.into(), ascent.into()].into(),
            ),
            ("ItalicAngle", 0.into()),
            ("Ascent", ascent.into()),
            ("Descent", descent.into()),
            ("CapHeight", ascent.into()),
            ("StemV", 80.into()),
        ]);

        let font = Dictionary::from_iter(vec![
            ("Type", "Font".into()),
            ("Subtype", "TrueType".into()),
            ("BaseFont", font_name),
            ("FirstChar", 32.into()),
            ("LastChar", 255.into()),
            ("Widths", widths.into()),
            ("Encoding", "WinAnsiEncoding".into()),
        ]);

        let font_file = Stream::new(
            Dictionary::from_iter(vec![("Length1", (ttf.data.len() as i64).into())]),
            ttf.data.clone(),
        );

        FontObjects::TrueType {
            font,
            descriptor,
            font_file,
        }
    }
}
