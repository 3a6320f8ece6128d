//! PDF Core - Low-level PDF generation
//!
//! This crate provides functionality for:
//! - Building a single-page PDF document from scratch at arbitrary dimensions
//! - Built-in Courier font metrics and TrueType font registration
//! - Measuring text width at a given font and size
//! - Inserting text at specific coordinates
//!
//! # Example
//!
//! ```
//! use pdf_core::{Align, PdfDocument};
//!
//! # fn main() -> pdf_core::Result<()> {
//! let mut doc = PdfDocument::new(500.0, 250.0)?;
//! doc.set_font("courier", 12.0)?;
//! doc.insert_text("Hello, World!", 100.0, 50.0, Align::Left)?;
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF"));
//! # Ok(())
//! # }
//! ```

mod document;
mod font;
mod text;

pub use document::{Color, PdfDocument};
pub use font::{BuiltinFont, FontData};
pub use text::{encode_winansi_hex, generate_text_operators, winansi_byte, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Invalid page dimensions: {0} x {1} pt")]
    InvalidDimensions(f64, f64),

    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Font already exists: {0}")]
    FontAlreadyExists(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Millimeters per PostScript point
///
/// Fixed approximation shared with the field-fit height estimate; kept at
/// this precision so fit decisions are reproducible across hosts.
pub const MM_PER_PT: f64 = 0.352778;

/// Convert millimeters to points
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / MM_PER_PT
}

/// Convert points to millimeters
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * MM_PER_PT
}
