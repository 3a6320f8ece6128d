//! Template Engine - cheque template parsing and rendering
//!
//! This crate provides:
//! - Cheque template schema types (surface + positioned fields)
//! - Template parsing and validation from JSON
//! - A font-size fitting engine for field bounding boxes
//! - The cheque renderer producing a single-page PDF
//!
//! # Example
//!
//! ```
//! use template::{parse_template, ChequeRenderer, FieldValues};
//!
//! # fn main() -> template::Result<()> {
//! let template = parse_template(r#"{
//!     "surface": { "width": 175.0, "height": 80.0 },
//!     "fields": [
//!         { "id": "payee", "type": "text",
//!           "position": { "x": 25.0, "y": 30.0 },
//!           "width": 100.0, "height": 8.0 }
//!     ]
//! }"#)?;
//!
//! let mut values = FieldValues::new();
//! values.set_text("payee", "Jane Doe");
//!
//! let renderer = ChequeRenderer::new(&template);
//! let mut cheque = renderer.render(&values)?;
//! let bytes = cheque.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF"));
//! # Ok(())
//! # }
//! ```

mod fit;
mod parser;
mod renderer;
mod schema;
mod values;

pub use fit::{fit_font_size, MeasureText, FONT_STEP, MIN_FONT_SIZE};
pub use parser::parse_template;
pub use renderer::{ChequeRenderer, RenderedCheque};
pub use schema::{ChequeTemplate, FieldKind, FieldSpec, Position, Surface};
pub use values::{FieldValue, FieldValues};

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse template: {0}")]
    ParseError(String),

    #[error("Invalid template: {0}")]
    ValidationError(String),

    #[error("Invalid surface dimensions: {0} x {1} mm")]
    InvalidSurface(f64, f64),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
