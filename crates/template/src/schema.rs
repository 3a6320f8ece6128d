//! Cheque template schema types

use serde::{Deserialize, Serialize};

/// Default font size in points when a field does not specify one
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Default font family when a field does not specify one
pub const DEFAULT_FONT_FAMILY: &str = "courier";

/// Cheque surface dimensions in millimeters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Surface {
    /// Width in millimeters
    pub width: f64,
    /// Height in millimeters
    pub height: f64,
}

/// A position on the cheque surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// X coordinate in millimeters (from left edge)
    pub x: f64,
    /// Y coordinate in millimeters (from top edge)
    pub y: f64,
}

/// Field value kind, controls value formatting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
}

/// A positioned field on the cheque surface
///
/// Serde names follow the JSON config artifact used by cheque designers
/// (`type`, `fontSize`, `fontFamily`, `maxLength`). `label`, `required`,
/// `max_length` and `validation` are form-side concerns carried through so
/// existing configs parse unchanged; the renderer does not act on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Unique field identifier
    pub id: String,

    /// Human-readable label (form-side)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Field value kind
    #[serde(rename = "type", default)]
    pub kind: FieldKind,

    /// Whether the form requires a value (form-side)
    #[serde(default)]
    pub required: bool,

    /// Top-left anchor of the field box, in millimeters
    pub position: Position,

    /// Box width in millimeters
    pub width: f64,

    /// Box height in millimeters
    pub height: f64,

    /// Preferred font size in points
    #[serde(rename = "fontSize", default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Font family name
    #[serde(
        rename = "fontFamily",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub font_family: Option<String>,

    /// Maximum input length (form-side)
    #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Input validation pattern (form-side)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
}

impl FieldSpec {
    /// Preferred font size, falling back to the default
    pub fn font_size_or_default(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Font family, falling back to the default
    pub fn font_family_or_default(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }
}

/// Root cheque template: a surface and its positioned fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChequeTemplate {
    /// Surface dimensions ("template" in the original config artifact)
    #[serde(alias = "template")]
    pub surface: Surface,

    /// Positioned fields
    pub fields: Vec<FieldSpec>,
}

impl ChequeTemplate {
    /// Look up a field by id
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }
}
