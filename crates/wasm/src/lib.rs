//! WASM bindings for rscheque
//!
//! This crate provides a JavaScript-friendly API for:
//! - French amount/date formatting
//! - Loading cheque templates from JSON
//! - Rendering cheques to PDF bytes or a Blob preview URL
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { ChequeTemplate, FrenchFormatter } from 'rscheque-wasm';
//!
//! await init();
//!
//! const template = ChequeTemplate.fromJson(configJson);
//! const pdf = template.render({
//!   payee: "Jane Doe",
//!   amount: 12500.5,
//!   amountWords: FrenchFormatter.amountWords(12500.5),
//!   date: "2024-03-15",
//! });
//!
//! // Embed in an <iframe src={...}>, then release before the next render
//! iframe.src = pdf.previewUrl();
//! // ...
//! pdf.revokePreview();
//! ```

use template::{ChequeRenderer, FieldValues};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// French text formatting utilities
#[wasm_bindgen]
pub struct FrenchFormatter;

#[wasm_bindgen]
impl FrenchFormatter {
    /// Spell out an amount in French words, with a centimes clause
    ///
    /// @param amount - Amount to spell out
    /// @returns French words (e.g., "Douze mille cinq cents et cinquante centimes")
    #[wasm_bindgen(js_name = amountWords)]
    pub fn amount_words(amount: f64) -> String {
        fr_text::format_amount_words(amount)
    }

    /// Format an amount for display with grouping and two decimals
    ///
    /// @param amount - Amount to format
    /// @returns Formatted string (e.g., "12,500.50")
    #[wasm_bindgen(js_name = formatAmount)]
    pub fn format_amount(amount: f64) -> String {
        fr_text::format_amount(amount)
    }

    /// Format a date as dd/mm/yyyy
    ///
    /// @param year - Year
    /// @param month - Month (1-12)
    /// @param day - Day
    /// @returns French date (e.g., "15/03/2024")
    #[wasm_bindgen(js_name = formatDate)]
    pub fn format_date(year: i32, month: u32, day: u32) -> Result<String, JsValue> {
        let date = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| JsValue::from_str(&format!("invalid date: {year}-{month}-{day}")))?;
        Ok(fr_text::format_french_date(date))
    }
}

/// Cheque template loaded from JSON
#[wasm_bindgen]
pub struct ChequeTemplate {
    inner: template::ChequeTemplate,
}

#[wasm_bindgen]
impl ChequeTemplate {
    /// Parse and validate a template from JSON
    ///
    /// @param json - Template JSON string
    /// @returns ChequeTemplate instance
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<ChequeTemplate, JsValue> {
        let inner =
            template::parse_template(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ChequeTemplate { inner })
    }

    /// Render field values onto the cheque
    ///
    /// @param values - Object mapping field ids to values
    /// @returns ChequePdf with the rendered bytes
    pub fn render(&self, values: JsValue) -> Result<ChequePdf, JsValue> {
        let values: FieldValues = serde_wasm_bindgen::from_value(values)?;

        let mut cheque = ChequeRenderer::new(&self.inner)
            .render(&values)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let bytes = cheque
            .to_bytes()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(ChequePdf {
            bytes,
            preview_url: None,
        })
    }
}

/// A rendered cheque PDF
///
/// Holds at most one live preview URL; `revokePreview` must be called before
/// dropping the object or the browser keeps the Blob alive.
#[wasm_bindgen]
pub struct ChequePdf {
    bytes: Vec<u8>,
    preview_url: Option<String>,
}

#[wasm_bindgen]
impl ChequePdf {
    /// PDF bytes
    ///
    /// @returns Uint8Array
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Blob object URL for embedding in an iframe or link
    ///
    /// Repeated calls return the same URL until it is revoked.
    ///
    /// @returns Object URL string
    #[wasm_bindgen(js_name = previewUrl)]
    pub fn preview_url(&mut self) -> Result<String, JsValue> {
        if let Some(url) = &self.preview_url {
            return Ok(url.clone());
        }

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(self.bytes.as_slice()));

        let props = web_sys::BlobPropertyBag::new();
        props.set_type("application/pdf");

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        self.preview_url = Some(url.clone());
        Ok(url)
    }

    /// Release the preview URL
    #[wasm_bindgen(js_name = revokePreview)]
    pub fn revoke_preview(&mut self) -> Result<(), JsValue> {
        if let Some(url) = self.preview_url.take() {
            web_sys::Url::revoke_object_url(&url)?;
        }
        Ok(())
    }
}
