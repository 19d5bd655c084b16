//! Configuration Type Definitions
//!
//! Core configuration structures for the intake service. These types are
//! deserialised from TOML configuration files.

use serde::Deserialize;

/// Root configuration for the intake service.
///
/// # Example Structure
///
/// ```toml
/// [broker]
/// url = "mqtt://localhost:1883"
/// qos = 0
///
/// [subscriptions]
/// topics = ["factory/sensor/data", "factory/alarm"]
/// ```
#[derive(Clone, Debug, Deserialize, Default)]
pub struct Config {
    /// MQTT broker connection settings
    #[serde(default)]
    pub broker: BrokerConfig,

    /// Topic subscriptions established at startup
    #[serde(default)]
    pub subscriptions: SubscriptionConfig,
}

/// MQTT broker connection settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BrokerConfig {
    /// Broker address as `mqtt://host:port` (the scheme and port are optional)
    #[serde(default = "default_broker_url")]
    pub url: String,

    /// Client identifier; a random one is generated when absent
    pub client_id: Option<String>,

    /// MQTT quality of service, 0 to 2
    #[serde(default)]
    pub qos: u8,

    /// Whether to start from a clean broker session
    #[serde(default = "default_clean_session")]
    pub clean_session: bool,

    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            url: default_broker_url(),
            client_id: None,
            qos: 0,
            clean_session: default_clean_session(),
            username: None,
            password: None,
        }
    }
}

/// Topic subscriptions established at startup.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SubscriptionConfig {
    /// Topics to subscribe to
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            topics: default_topics(),
        }
    }
}

fn default_broker_url() -> String {
    "mqtt://localhost:1883".to_string()
}

const fn default_clean_session() -> bool {
    true
}

fn default_topics() -> Vec<String> {
    vec!["factory/sensor/data".to_string(), "factory/alarm".to_string()]
}
