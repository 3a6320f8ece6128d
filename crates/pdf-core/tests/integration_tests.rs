//! Integration tests for pdf-core
//!
//! These tests verify end-to-end functionality with real PDF output.

use pdf_core::{Align, Color, PdfDocument, PdfError};

#[test]
fn test_new_document_saves_valid_pdf() {
    let mut doc = PdfDocument::new(499.0, 216.0).unwrap();
    let bytes = doc.to_bytes().unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.ends_with(b"%%EOF\n") || bytes.ends_with(b"%%EOF"));

    // Output must parse back as a one-page document at the same size
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(parsed.get_pages().len(), 1);
}

#[test]
fn test_invalid_dimensions_rejected() {
    for (w, h) in [(0.0, 100.0), (100.0, 0.0), (-10.0, 100.0), (f64::NAN, 1.0)] {
        assert!(matches!(
            PdfDocument::new(w, h),
            Err(PdfError::InvalidDimensions(_, _))
        ));
    }
}

#[test]
fn test_insert_text_and_export() {
    let mut doc = PdfDocument::new(499.0, 216.0).unwrap();
    doc.set_font("courier", 12.0).unwrap();
    doc.insert_text("Douze mille cinq cents", 30.0, 80.0, Align::Left)
        .unwrap();
    doc.insert_text("12,500.00", 400.0, 50.0, Align::Right)
        .unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();

    // The content stream carries text operators and the page carries the font
    let pages = parsed.get_pages();
    let page_id = pages[&1];
    let content = parsed.get_page_content(page_id).unwrap();
    let content_str = String::from_utf8_lossy(&content);
    assert!(content_str.contains("Tj"));
    assert!(content_str.contains("/F1 12 Tf"));

    let fonts = parsed.get_page_fonts(page_id);
    assert_eq!(fonts.len(), 1);
}

#[test]
fn test_courier_text_width() {
    let mut doc = PdfDocument::new(499.0, 216.0).unwrap();
    doc.set_font("courier", 14.0).unwrap();

    // Courier is monospaced at 600/1000 em: 9 chars * 8.4pt
    let width = doc.text_width("12,500.50").unwrap();
    assert!((width - 9.0 * 0.6 * 14.0).abs() < 1e-6);
}

#[test]
fn test_accented_text_renders() {
    let mut doc = PdfDocument::new(499.0, 216.0).unwrap();
    doc.set_font("courier", 12.0).unwrap();
    doc.insert_text("Quatre-vingt-dix-neuf et un centime", 30.0, 80.0, Align::Left)
        .unwrap();
    doc.insert_text("Zéro", 30.0, 100.0, Align::Left).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let content = parsed.get_page_content(parsed.get_pages()[&1]).unwrap();
    let content_str = String::from_utf8_lossy(&content);

    // "Zéro" in WinAnsi hex
    assert!(content_str.contains("<5AE9726F>"));
}

#[test]
fn test_multiple_fonts_get_distinct_resources() {
    let mut doc = PdfDocument::new(499.0, 216.0).unwrap();
    doc.set_font("courier", 12.0).unwrap();
    doc.insert_text("one", 10.0, 20.0, Align::Left).unwrap();
    doc.set_font("courier-bold", 12.0).unwrap();
    doc.insert_text("two", 10.0, 40.0, Align::Left).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let fonts = parsed.get_page_fonts(parsed.get_pages()[&1]);
    assert_eq!(fonts.len(), 2);
}

#[test]
fn test_text_color_in_output() {
    let mut doc = PdfDocument::new(499.0, 216.0).unwrap();
    doc.set_font("courier", 12.0).unwrap();
    doc.set_text_color(Color::from_rgb(255, 0, 0));
    doc.insert_text("red", 10.0, 20.0, Align::Left).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let content = parsed.get_page_content(parsed.get_pages()[&1]).unwrap();
    assert!(String::from_utf8_lossy(&content).contains("1 0 0 rg"));
}

#[test]
fn test_output_is_deterministic() {
    let render = || {
        let mut doc = PdfDocument::new(499.0, 216.0).unwrap();
        doc.set_font("courier", 12.0).unwrap();
        doc.insert_text("Jane Doe", 30.0, 60.0, Align::Left).unwrap();
        doc.insert_text("12,500.50", 400.0, 60.0, Align::Right)
            .unwrap();
        doc.to_bytes().unwrap()
    };

    assert_eq!(render(), render());
}

#[test]
fn test_register_font_rejects_duplicates_and_garbage() {
    let mut doc = PdfDocument::new(499.0, 216.0).unwrap();

    // Builtin names are taken
    assert!(matches!(
        doc.register_font("courier", &[0u8; 4]),
        Err(PdfError::FontAlreadyExists(_))
    ));

    // Garbage bytes fail to parse
    assert!(matches!(
        doc.register_font("custom", &[0u8; 100]),
        Err(PdfError::FontParseError(_))
    ));
}
