//! Topic handlers for the two message families the intake recognises.

pub mod alarm;
pub mod sensor;

pub use alarm::AlarmHandler;
pub use sensor::SensorHandler;

use crate::core::dispatcher::Dispatcher;

use serde_json::{Map, Value};
use std::fmt::Display;

/// Build the standard routing table. The sensor route is registered
/// first so a topic matching both patterns routes to the sensor handler.
pub fn build_dispatcher() -> Dispatcher {
    Dispatcher::new()
        .route("sensor/data", Box::new(SensorHandler))
        .route("alarm", Box::new(AlarmHandler))
}

/// Extract a string field from a decoded payload. A missing key or a
/// non-string value both yield `None`.
pub(crate) fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Extract a numeric field from a decoded payload. A missing key or a
/// non-numeric value both yield `None`.
pub(crate) fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    fields.get(key).and_then(Value::as_f64)
}

/// Render an optional field for a log line: the value when present,
/// `null` when the publisher omitted the key.
pub(crate) fn fmt_opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields() -> Map<String, Value> {
        json!({
            "equipment_id": "EQ-001",
            "temperature": 75.5,
            "speed": 1500,
            "flag": true,
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_string_field_extraction() {
        let fields = fields();
        assert_eq!(string_field(&fields, "equipment_id"), Some("EQ-001".to_string()));
        assert_eq!(string_field(&fields, "missing"), None);
        // Wrong type reads as absent, not as an error.
        assert_eq!(string_field(&fields, "temperature"), None);
    }

    #[test]
    fn test_number_field_extraction() {
        let fields = fields();
        assert_eq!(number_field(&fields, "temperature"), Some(75.5));
        assert_eq!(number_field(&fields, "speed"), Some(1500.0));
        assert_eq!(number_field(&fields, "missing"), None);
        assert_eq!(number_field(&fields, "equipment_id"), None);
    }

    #[test]
    fn test_fmt_opt_renders_null_for_absent() {
        assert_eq!(fmt_opt(&Some(75.5)), "75.5");
        assert_eq!(fmt_opt(&None::<f64>), "null");
    }
}
