//! Integration tests for the cheque template engine
//!
//! These tests exercise the full parse -> render -> export pipeline with a
//! config shaped like the real cheque designer artifact.

use chrono::NaiveDate;
use template::{parse_template, ChequeRenderer, FieldValues, TemplateError};

/// Config matching the original cheque designer output, "template" key included
const CHEQUE_CONFIG: &str = r#"{
    "template": { "width": 175.0, "height": 80.0 },
    "fields": [
        {
            "id": "date",
            "label": "Date",
            "type": "date",
            "required": true,
            "position": { "x": 130.0, "y": 12.0 },
            "width": 35.0,
            "height": 6.0,
            "fontSize": 10
        },
        {
            "id": "payee",
            "label": "A l'ordre de",
            "type": "text",
            "required": true,
            "position": { "x": 25.0, "y": 30.0 },
            "width": 60.0,
            "height": 10.0
        },
        {
            "id": "amount",
            "label": "Montant",
            "type": "number",
            "required": true,
            "position": { "x": 130.0, "y": 25.0 },
            "width": 30.0,
            "height": 8.0,
            "fontSize": 14
        },
        {
            "id": "amountWords",
            "label": "Montant en lettres",
            "type": "text",
            "required": true,
            "position": { "x": 25.0, "y": 42.0 },
            "width": 140.0,
            "height": 8.0
        }
    ]
}"#;

fn filled_values() -> FieldValues {
    let mut values = FieldValues::new();
    values.set_date("date", NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    values.set_text("payee", "Jane Doe");
    values.set_number("amount", 12500.5);
    values.set_text("amountWords", &fr_text::format_amount_words(12500.5));
    values
}

fn page_text_ops(bytes: &[u8]) -> String {
    let parsed = lopdf::Document::load_mem(bytes).unwrap();
    let page_id = parsed.get_pages()[&1];
    let content = parsed.get_page_content(page_id).unwrap();
    String::from_utf8_lossy(&content).into_owned()
}

fn winansi_hex(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:02X}", c as u32 as u8))
        .collect()
}

#[test]
fn test_full_cheque_render() {
    let template = parse_template(CHEQUE_CONFIG).unwrap();
    let renderer = ChequeRenderer::new(&template);

    let mut cheque = renderer.render(&filled_values()).unwrap();
    let bytes = cheque.to_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let ops = page_text_ops(&bytes);

    // All four fields drawn: payee verbatim, amount grouped, date dd/mm/yyyy,
    // words with the trailing currency word
    assert!(ops.contains(&winansi_hex("Jane Doe")));
    assert!(ops.contains(&winansi_hex("12,500.50")));
    assert!(ops.contains(&winansi_hex("15/03/2024")));
    assert!(ops.contains(&winansi_hex(
        "Douze mille cinq cents et cinquante centimes Dinar"
    )));
}

#[test]
fn test_amount_keeps_preferred_size_when_it_fits() {
    let template = parse_template(CHEQUE_CONFIG).unwrap();
    let renderer = ChequeRenderer::new(&template);

    let mut cheque = renderer.render(&filled_values()).unwrap();
    let ops = page_text_ops(&cheque.to_bytes().unwrap());

    // "12,500.50" in Courier at 14pt is 26.7mm wide, inside the 30mm box
    assert!(ops.contains("14 Tf"));
}

#[test]
fn test_long_words_shrink_to_fit() {
    let template = parse_template(CHEQUE_CONFIG).unwrap();
    let renderer = ChequeRenderer::new(&template);

    let mut values = filled_values();
    let long = fr_text::format_amount_words(1_234_567.89);
    values.set_text("amountWords", &long);

    // Renders without error; the fitter takes care of overflow
    let mut cheque = renderer.render(&values).unwrap();
    let ops = page_text_ops(&cheque.to_bytes().unwrap());
    assert!(ops.contains(&winansi_hex(&format!("{long} Dinar"))));
}

#[test]
fn test_empty_values_render_blank_cheque() {
    let template = parse_template(CHEQUE_CONFIG).unwrap();
    let renderer = ChequeRenderer::new(&template);

    let mut cheque = renderer.render(&FieldValues::new()).unwrap();
    let bytes = cheque.to_bytes().unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(parsed.get_pages().len(), 1);
}

#[test]
fn test_values_from_json() {
    let template = parse_template(CHEQUE_CONFIG).unwrap();
    let renderer = ChequeRenderer::new(&template);

    let values = FieldValues::from_json(
        r#"{
            "payee": "Jane Doe",
            "amount": 12500.5,
            "date": "2024-03-15",
            "unknownField": "ignored"
        }"#,
    )
    .unwrap();

    let mut cheque = renderer.render(&values).unwrap();
    let ops = page_text_ops(&cheque.to_bytes().unwrap());
    assert!(ops.contains(&winansi_hex("15/03/2024")));
}

#[test]
fn test_render_is_deterministic() {
    let template = parse_template(CHEQUE_CONFIG).unwrap();
    let renderer = ChequeRenderer::new(&template);

    let render = || {
        renderer
            .render(&filled_values())
            .unwrap()
            .to_bytes()
            .unwrap()
    };

    assert_eq!(render(), render());
}

#[test]
fn test_invalid_surface_is_a_distinct_error() {
    let result = parse_template(
        r#"{
            "surface": { "width": -5.0, "height": 80.0 },
            "fields": []
        }"#,
    );
    assert!(matches!(result, Err(TemplateError::InvalidSurface(_, _))));
}

#[test]
fn test_overlapping_field_id_rejected_at_parse() {
    let result = parse_template(
        r#"{
            "surface": { "width": 175.0, "height": 80.0 },
            "fields": [
                { "id": "payee", "position": { "x": 10.0, "y": 10.0 }, "width": 50.0, "height": 8.0 },
                { "id": "payee", "position": { "x": 10.0, "y": 30.0 }, "width": 50.0, "height": 8.0 }
            ]
        }"#,
    );
    assert!(matches!(result, Err(TemplateError::ValidationError(_))));
}
