use super::{fmt_opt, number_field, string_field};
use crate::core::dispatcher::TopicHandler;
use crate::core::error::IntakeError;
use crate::core::parser;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// One equipment telemetry sample.
///
/// Every field is optional: publishers are free to omit keys, and a key
/// holding an unexpected JSON type reads the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorReading {
    pub equipment_id: Option<String>,
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub vibration: Option<f64>,
    pub speed: Option<f64>,
}

impl SensorReading {
    /// Extract the known fields from a decoded payload, defaulting to
    /// `None` for anything missing.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            equipment_id: string_field(fields, "equipment_id"),
            temperature: number_field(fields, "temperature"),
            pressure: number_field(fields, "pressure"),
            vibration: number_field(fields, "vibration"),
            speed: number_field(fields, "speed"),
        }
    }
}

/// Handles payloads arriving on sensor data topics.
pub struct SensorHandler;

#[async_trait]
impl TopicHandler for SensorHandler {
    fn name(&self) -> &str {
        "sensor"
    }

    async fn handle(&self, payload: &str) -> Result<(), IntakeError> {
        // Parse failures are contained here: the message is rejected with
        // one error log and processing of it stops.
        let fields = match parser::parse(payload) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::error!("Sensor payload rejected: {e}");
                return Ok(());
            }
        };

        let reading = SensorReading::from_fields(&fields);

        tracing::info!(
            "Sensor reading [{}]: temperature={}°C pressure={}kPa vibration={}mm/s speed={}RPM",
            fmt_opt(&reading.equipment_id),
            fmt_opt(&reading.temperature),
            fmt_opt(&reading.pressure),
            fmt_opt(&reading.vibration),
            fmt_opt(&reading.speed)
        );

        // TODO: hand the reading to the storage layer once one exists
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_handles_well_formed_payload() {
        let payload = r#"{"equipment_id":"EQ1","temperature":75.5,"pressure":101.3,"vibration":0.02,"speed":1500}"#;
        assert!(SensorHandler.handle(payload).await.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_contained() {
        // The parse error must be swallowed inside the handler.
        assert!(SensorHandler.handle("not-json").await.is_ok());
    }

    #[test]
    fn test_from_fields_full_payload() {
        let fields = json!({
            "equipment_id": "EQ1",
            "temperature": 75.5,
            "pressure": 101.3,
            "vibration": 0.02,
            "speed": 1500
        })
        .as_object()
        .unwrap()
        .clone();

        let reading = SensorReading::from_fields(&fields);
        assert_eq!(reading.equipment_id, Some("EQ1".to_string()));
        assert_eq!(reading.temperature, Some(75.5));
        assert_eq!(reading.pressure, Some(101.3));
        assert_eq!(reading.vibration, Some(0.02));
        assert_eq!(reading.speed, Some(1500.0));
    }

    #[test]
    fn test_from_fields_missing_keys_are_none() {
        let fields = json!({"temperature": 80.0}).as_object().unwrap().clone();

        let reading = SensorReading::from_fields(&fields);
        assert_eq!(reading.temperature, Some(80.0));
        assert_eq!(reading, SensorReading {
            temperature: Some(80.0),
            ..Default::default()
        });
    }

    #[test]
    fn test_from_fields_ignores_unknown_keys() {
        let fields = json!({"equipment_id": "EQ2", "timestamp_ms": 1700000000000_u64})
            .as_object()
            .unwrap()
            .clone();

        let reading = SensorReading::from_fields(&fields);
        assert_eq!(reading.equipment_id, Some("EQ2".to_string()));
        assert_eq!(reading.speed, None);
    }
}
