use crate::core::time::now_millis;

/// A single inbound publish. Built once when the transport receives it,
/// never mutated, discarded after dispatch.
#[derive(Debug, Clone)]
pub struct Message {
    pub topic: String,
    pub payload: String,
    pub timestamp: u64,
}

impl Message {
    pub fn new(topic: &str, payload: &str) -> Self {
        Self {
            topic: topic.to_string(),
            payload: payload.to_string(),
            timestamp: now_millis(),
        }
    }
}
