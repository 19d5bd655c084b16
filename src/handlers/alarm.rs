use super::{fmt_opt, string_field};
use crate::core::dispatcher::TopicHandler;
use crate::core::error::IntakeError;
use crate::core::parser;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// An alarm raised by equipment or an edge gateway.
///
/// `kind` is carried as `"type"` on the wire. Same optionality rules as
/// sensor readings: nothing is enforced, absent keys are not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlarmEvent {
    pub kind: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

impl AlarmEvent {
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            kind: string_field(fields, "type"),
            message: string_field(fields, "message"),
            timestamp: string_field(fields, "timestamp"),
        }
    }
}

/// Handles payloads arriving on alarm topics. Alarms log at warn level.
pub struct AlarmHandler;

#[async_trait]
impl TopicHandler for AlarmHandler {
    fn name(&self) -> &str {
        "alarm"
    }

    async fn handle(&self, payload: &str) -> Result<(), IntakeError> {
        let fields = match parser::parse(payload) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::error!("Alarm payload rejected: {e}");
                return Ok(());
            }
        };

        let alarm = AlarmEvent::from_fields(&fields);

        tracing::warn!(
            "Alarm received: type={} message={} timestamp={}",
            fmt_opt(&alarm.kind),
            fmt_opt(&alarm.message),
            fmt_opt(&alarm.timestamp)
        );

        // TODO: hand the alarm to the storage layer once one exists
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_handles_well_formed_payload() {
        let payload =
            r#"{"type":"OVERHEAT","message":"Temp exceeded","timestamp":"2024-01-01T00:00:00Z"}"#;
        assert!(AlarmHandler.handle(payload).await.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_contained() {
        assert!(AlarmHandler.handle("{{{").await.is_ok());
    }

    #[test]
    fn test_from_fields_reads_type_key() {
        let fields = json!({
            "type": "OVERHEAT",
            "message": "Temp exceeded",
            "timestamp": "2024-01-01T00:00:00Z"
        })
        .as_object()
        .unwrap()
        .clone();

        let alarm = AlarmEvent::from_fields(&fields);
        assert_eq!(alarm.kind, Some("OVERHEAT".to_string()));
        assert_eq!(alarm.message, Some("Temp exceeded".to_string()));
        assert_eq!(alarm.timestamp, Some("2024-01-01T00:00:00Z".to_string()));
    }

    #[test]
    fn test_from_fields_missing_keys_are_none() {
        let fields = json!({"message": "Door open"}).as_object().unwrap().clone();

        let alarm = AlarmEvent::from_fields(&fields);
        assert_eq!(alarm.kind, None);
        assert_eq!(alarm.message, Some("Door open".to_string()));
        assert_eq!(alarm.timestamp, None);
    }
}
