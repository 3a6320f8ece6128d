//! Generate a filled cheque PDF
//!
//! Run with: cargo run --example cheque

use anyhow::Result;
use chrono::NaiveDate;
use template::{parse_template, ChequeRenderer, FieldValues};

const CONFIG: &str = r#"{
    "template": { "width": 175.0, "height": 80.0 },
    "fields": [
        { "id": "date", "type": "date",
          "position": { "x": 130.0, "y": 12.0 }, "width": 35.0, "height": 6.0,
          "fontSize": 10 },
        { "id": "payee", "type": "text",
          "position": { "x": 25.0, "y": 30.0 }, "width": 60.0, "height": 10.0 },
        { "id": "amount", "type": "number",
          "position": { "x": 130.0, "y": 25.0 }, "width": 30.0, "height": 8.0,
          "fontSize": 14 },
        { "id": "amountWords", "type": "text",
          "position": { "x": 25.0, "y": 42.0 }, "width": 140.0, "height": 8.0 }
    ]
}"#;

fn main() -> Result<()> {
    let template = parse_template(CONFIG)?;

    let amount = 12500.50;
    let mut values = FieldValues::new();
    values.set_date("date", NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    values.set_text("payee", "Jane Doe");
    values.set_number("amount", amount);
    values.set_text("amountWords", &fr_text::format_amount_words(amount));

    let renderer = ChequeRenderer::new(&template);
    let mut cheque = renderer.render(&values)?;
    cheque.save("cheque.pdf")?;

    println!("Wrote cheque.pdf");
    Ok(())
}
