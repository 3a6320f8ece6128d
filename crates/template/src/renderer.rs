//! Cheque rendering

use crate::fit::fit_font_size;
use crate::schema::{ChequeTemplate, FieldKind, FieldSpec, DEFAULT_FONT_FAMILY};
use crate::values::{FieldValue, FieldValues};
use crate::Result;
use fr_text::{format_amount, format_amount_lenient, format_french_date, parse_french_date};
use pdf_core::{mm_to_pt, Align, PdfDocument};
use std::path::Path;

/// Field id that receives the amount spelled out in words
///
/// Fixed by the cheque config convention; the renderer appends the currency
/// word to whatever value this field carries.
const WORDS_FIELD_ID: &str = "amountWords";

/// Currency word appended to the words field
const CURRENCY_WORD: &str = "Dinar";

/// Renders field values onto a cheque template
pub struct ChequeRenderer<'a> {
    template: &'a ChequeTemplate,
}

impl<'a> ChequeRenderer<'a> {
    /// Create a renderer for a template
    pub fn new(template: &'a ChequeTemplate) -> Self {
        Self { template }
    }

    /// Render field values onto the cheque surface
    ///
    /// Fields with no value (or an empty/whitespace value) are skipped; value
    /// ids with no matching field are ignored. Each drawn field shrinks its
    /// font size as needed to stay inside its bounding box.
    pub fn render(&self, values: &FieldValues) -> Result<RenderedCheque> {
        self.template.validate()?;

        let surface = self.template.surface;
        let mut doc = PdfDocument::new(mm_to_pt(surface.width), mm_to_pt(surface.height))?;

        for field in &self.template.fields {
            let Some(value) = values.get(&field.id) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            let mut display = format_value(field, value);
            if field.id == WORDS_FIELD_ID {
                display = format!("{display} {CURRENCY_WORD}");
            }

            let family = self.resolve_family(&doc, field);

            let preferred = field.font_size_or_default();
            let size = {
                let measure =
                    |text: &str, size: f32| doc.measure_text(family, text, size).unwrap_or(0.0);
                fit_font_size(&measure, &display, field.width, field.height, preferred)
            };

            doc.set_font(family, size)?;
            doc.insert_text(
                &display,
                mm_to_pt(field.position.x),
                mm_to_pt(field.position.y),
                Align::Left,
            )?;
        }

        Ok(RenderedCheque { doc })
    }

    /// Resolve a field's font family, falling back to the default face
    fn resolve_family<'f>(&self, doc: &PdfDocument, field: &'f FieldSpec) -> &'f str {
        let family = field.font_family_or_default();
        if doc.has_font(family) {
            family
        } else {
            DEFAULT_FONT_FAMILY
        }
    }
}

/// Format a field value for display according to the field kind
fn format_value(field: &FieldSpec, value: &FieldValue) -> String {
    match (field.kind, value) {
        (FieldKind::Number, FieldValue::Number(n)) => format_amount(*n),
        (FieldKind::Number, FieldValue::Text(s)) => format_amount_lenient(s),
        (FieldKind::Date, FieldValue::Date(d)) => format_french_date(*d),
        (FieldKind::Date, FieldValue::Text(s)) => parse_french_date(s)
            .map(format_french_date)
            .unwrap_or_else(|_| s.clone()),
        (_, FieldValue::Text(s)) => s.clone(),
        (_, FieldValue::Number(n)) => n.to_string(),
        (_, FieldValue::Date(d)) => format_french_date(*d),
    }
}

/// A rendered cheque ready for export
pub struct RenderedCheque {
    doc: PdfDocument,
}

impl RenderedCheque {
    /// Export the cheque as PDF bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        Ok(self.doc.to_bytes()?)
    }

    /// Save the cheque to a file
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        Ok(self.doc.save(path)?)
    }
}
