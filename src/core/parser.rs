use crate::core::error::ParseError;

use serde_json::{Map, Value};

/// Decode a raw text payload into a keyed JSON object.
///
/// Values are left loosely typed: strings, numbers, nulls and nested
/// structures all pass through untouched, and no schema is enforced.
/// The function holds no state and is safe to call from any context.
pub fn parse(payload: &str) -> Result<Map<String, Value>, ParseError> {
    let fields: Map<String, Value> = serde_json::from_str(payload)?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_object() {
        let fields = parse(r#"{"equipment_id":"EQ1","temperature":75.5}"#).unwrap();
        assert_eq!(fields.get("equipment_id"), Some(&json!("EQ1")));
        assert_eq!(fields.get("temperature"), Some(&json!(75.5)));
    }

    #[test]
    fn test_parse_preserves_loose_typing() {
        let fields = parse(r#"{"a":null,"b":[1,2],"c":{"nested":true}}"#).unwrap();
        assert_eq!(fields.get("a"), Some(&Value::Null));
        assert_eq!(fields.get("b"), Some(&json!([1, 2])));
        assert_eq!(fields.get("c"), Some(&json!({"nested": true})));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(parse("not-json").is_err());
        assert!(parse(r#"{"unterminated": "#).is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_object_top_level() {
        assert!(parse("42").is_err());
        assert!(parse(r#"[{"a":1}]"#).is_err());
    }
}
