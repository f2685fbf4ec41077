//! Parse model output into a classification and field values
//!
//! The parser is strict about structure and lenient about content: anything
//! that is not one JSON object is a parse failure, while an unrecognized
//! document type or missing fields degrade gracefully inside an `Ok`
//! outcome.

use crate::error::ExtractorError;
use lading_domain::DocumentType;
use serde_json::Value;
use std::collections::BTreeMap;

/// Parse a raw model response into `(document_type, fields)`.
///
/// Only fields belonging to the classified type's schema are retained, and
/// only when the model produced a non-empty value for them.
pub fn parse_model_response(
    response: &str,
) -> Result<(DocumentType, BTreeMap<String, String>), ExtractorError> {
    let unfenced = strip_code_fence(response);
    let object_str = isolate_object(&unfenced)
        .ok_or_else(|| ExtractorError::InvalidFormat("no JSON object in response".to_string()))?;

    let json: Value = serde_json::from_str(object_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("expected a JSON object".to_string()))?;

    let document_type = obj
        .get("document_type")
        .and_then(Value::as_str)
        .map(DocumentType::classify)
        .unwrap_or(DocumentType::Unknown);

    let mut fields = BTreeMap::new();
    for name in document_type.field_schema() {
        if let Some(value) = obj.get(*name).and_then(field_value) {
            fields.insert((*name).to_string(), value);
        }
    }

    Ok((document_type, fields))
}

/// Unwrap a markdown code block if the model added one
fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();
    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }
        lines[1..lines.len().saturating_sub(1)].join("\n")
    } else {
        trimmed.to_string()
    }
}

/// Slice out the outermost `{...}`, tolerating prose around it
fn isolate_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Accept strings and bare numbers as field values; drop empties
fn field_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_invoice() {
        let response = r#"{
            "document_type": "Invoice",
            "invoice_number": "123",
            "issue_date": "2024-05-01",
            "total_amount_usd": "500",
            "vessel_name": ""
        }"#;

        let (document_type, fields) = parse_model_response(response).unwrap();
        assert_eq!(document_type, DocumentType::Invoice);
        assert_eq!(fields.get("invoice_number").unwrap(), "123");
        assert_eq!(fields.get("total_amount_usd").unwrap(), "500");
        // vessel_name is not an invoice field; empty strings are dropped anyway
        assert!(!fields.contains_key("vessel_name"));
    }

    #[test]
    fn test_parse_with_markdown_fence() {
        let response = "```json\n{\"document_type\": \"Bill of Lading\", \"vessel_name\": \"MT AURORA\"}\n```";

        let (document_type, fields) = parse_model_response(response).unwrap();
        assert_eq!(document_type, DocumentType::BillOfLading);
        assert_eq!(fields.get("vessel_name").unwrap(), "MT AURORA");
    }

    #[test]
    fn test_parse_with_surrounding_prose() {
        let response = "Sure! Here is the extraction:\n{\"document_type\": \"Certificate\", \"issue_date\": \"2024-06-12\"}\nLet me know if you need anything else.";

        let (document_type, fields) = parse_model_response(response).unwrap();
        assert_eq!(document_type, DocumentType::Certificate);
        assert_eq!(fields.get("issue_date").unwrap(), "2024-06-12");
    }

    #[test]
    fn test_parse_numeric_field_value() {
        let response = r#"{"document_type": "Invoice", "total_amount_usd": 500}"#;

        let (_, fields) = parse_model_response(response).unwrap();
        assert_eq!(fields.get("total_amount_usd").unwrap(), "500");
    }

    #[test]
    fn test_unrecognized_type_is_unknown_with_no_fields() {
        let response = r#"{"document_type": "Packing List", "invoice_number": "9"}"#;

        let (document_type, fields) = parse_model_response(response).unwrap();
        assert_eq!(document_type, DocumentType::Unknown);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_missing_document_type_is_unknown() {
        let (document_type, fields) = parse_model_response(r#"{"invoice_number": "9"}"#).unwrap();
        assert_eq!(document_type, DocumentType::Unknown);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_missing_schema_fields_are_absent_not_fatal() {
        let response = r#"{"document_type": "Invoice", "invoice_number": "123"}"#;

        let (document_type, fields) = parse_model_response(response).unwrap();
        assert_eq!(document_type, DocumentType::Invoice);
        assert_eq!(fields.len(), 1);
        assert!(!fields.contains_key("due_date"));
    }

    #[test]
    fn test_plain_text_is_a_parse_failure() {
        let result = parse_model_response("I could not find any structured data here.");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_failure() {
        let result = parse_model_response(r#"{"document_type": "Invoice", "#);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_json_array_is_a_parse_failure() {
        // rfind catches the object inside, which parses; an array wrapper
        // without any object must still fail.
        let result = parse_model_response(r#"["Invoice", "Certificate"]"#);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_empty_response_is_a_parse_failure() {
        assert!(parse_model_response("").is_err());
        assert!(parse_model_response("```\n```").is_err());
    }
}
