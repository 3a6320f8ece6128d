//! Template JSON parsing and validation

use crate::{ChequeTemplate, Result, TemplateError};
use std::collections::HashSet;

/// Parse and validate a cheque template from a JSON string
pub fn parse_template(json: &str) -> Result<ChequeTemplate> {
    let template: ChequeTemplate =
        serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))?;
    template.validate()?;
    Ok(template)
}

impl ChequeTemplate {
    /// Validate template invariants
    ///
    /// - surface dimensions are finite and positive
    /// - field ids are unique
    /// - positions and sizes are finite and non-negative
    /// - every field box lies inside the surface
    pub fn validate(&self) -> Result<()> {
        let w = self.surface.width;
        let h = self.surface.height;
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(TemplateError::InvalidSurface(w, h));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(TemplateError::ValidationError(format!(
                    "duplicate field id: {}",
                    field.id
                )));
            }

            let values = [
                field.position.x,
                field.position.y,
                field.width,
                field.height,
            ];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(TemplateError::ValidationError(format!(
                    "field {}: position and size must be finite and non-negative",
                    field.id
                )));
            }

            if field.position.x + field.width > w || field.position.y + field.height > h {
                return Err(TemplateError::ValidationError(format!(
                    "field {} extends beyond the {w} x {h} mm surface",
                    field.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_template(fields: &str) -> String {
        format!(
            r#"{{
                "surface": {{ "width": 175.0, "height": 80.0 }},
                "fields": [{fields}]
            }}"#
        )
    }

    fn field_json(id: &str, x: f64, y: f64, w: f64, h: f64) -> String {
        format!(
            r#"{{ "id": "{id}", "position": {{ "x": {x}, "y": {y} }}, "width": {w}, "height": {h} }}"#
        )
    }

    #[test]
    fn test_parse_valid_template() {
        let json = minimal_template(&field_json("payee", 25.0, 30.0, 100.0, 8.0));
        let template = parse_template(&json).unwrap();
        assert_eq!(template.fields.len(), 1);
        assert!(template.field("payee").is_some());
        assert!(template.field("nope").is_none());
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            parse_template("{ not json"),
            Err(TemplateError::ParseError(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let fields = format!(
            "{}, {}",
            field_json("payee", 10.0, 10.0, 50.0, 8.0),
            field_json("payee", 10.0, 30.0, 50.0, 8.0)
        );
        let result = parse_template(&minimal_template(&fields));
        assert!(matches!(result, Err(TemplateError::ValidationError(_))));
    }

    #[test]
    fn test_negative_position_rejected() {
        let json = minimal_template(&field_json("payee", -1.0, 10.0, 50.0, 8.0));
        assert!(matches!(
            parse_template(&json),
            Err(TemplateError::ValidationError(_))
        ));
    }

    #[test]
    fn test_field_outside_surface_rejected() {
        // 130 + 50 > 175
        let json = minimal_template(&field_json("amount", 130.0, 10.0, 50.0, 8.0));
        assert!(matches!(
            parse_template(&json),
            Err(TemplateError::ValidationError(_))
        ));
    }

    #[test]
    fn test_field_touching_edge_is_valid() {
        // 125 + 50 == 175 exactly
        let json = minimal_template(&field_json("amount", 125.0, 10.0, 50.0, 8.0));
        assert!(parse_template(&json).is_ok());
    }

    #[test]
    fn test_invalid_surface_rejected() {
        let json = r#"{
            "surface": { "width": 0.0, "height": 80.0 },
            "fields": []
        }"#;
        assert!(matches!(
            parse_template(json),
            Err(TemplateError::InvalidSurface(_, _))
        ));
    }
}
