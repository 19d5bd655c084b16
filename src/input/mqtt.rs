use crate::config::Config;
use crate::core::dispatcher::Dispatcher;
use crate::core::message::Message;

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use tokio::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// MQTT subscription loop feeding the dispatcher.
///
/// Messages are dispatched to completion before the next poll, so each
/// one is processed on its own before another is accepted from the
/// broker. Dispatch never fails, which keeps the subscription alive
/// across malformed messages; only transport-level problems surface
/// here, and those are logged and retried by polling again.
pub struct MqttIntake {
    config: Config,
    dispatcher: Dispatcher,
}

impl MqttIntake {
    pub fn new(config: Config, dispatcher: Dispatcher) -> Self {
        Self { config, dispatcher }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let (client, mut eventloop) = AsyncClient::new(self.mqtt_options()?, 10);

        for topic in &self.config.subscriptions.topics {
            client
                .subscribe(topic, self.qos())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to subscribe to topic '{}': {}", topic, e))?;
            tracing::info!(
                "Subscribed to MQTT topic: {} (QoS: {})",
                topic,
                self.config.broker.qos
            );
        }

        tracing::info!("MQTT intake connected to {}", self.config.broker.url);

        loop {
            match eventloop.poll().await {
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    let payload = decode_payload(&publish.payload);
                    let message = Message::new(&publish.topic, &payload);

                    tracing::debug!("Received MQTT message on topic: {}", message.topic);
                    self.dispatcher.dispatch(&message).await;
                }
                Ok(_) => {}
                Err(e) => {
                    // rumqttc reconnects on the next poll; back off a little
                    // so a dead broker does not spin the loop.
                    tracing::error!("MQTT connection error: {}", e);
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }

    fn mqtt_options(&self) -> anyhow::Result<MqttOptions> {
        let (host, port) = self.parse_broker_url()?;

        let client_id = self
            .config
            .broker
            .client_id
            .clone()
            .unwrap_or_else(|| format!("mes-intake_{}", uuid::Uuid::new_v4()));

        let mut mqttoptions = MqttOptions::new(&client_id, host, port);
        mqttoptions.set_clean_session(self.config.broker.clean_session);

        if let (Some(username), Some(password)) =
            (&self.config.broker.username, &self.config.broker.password)
        {
            mqttoptions.set_credentials(username, password);
        }

        Ok(mqttoptions)
    }

    fn parse_broker_url(&self) -> anyhow::Result<(String, u16)> {
        let url = &self.config.broker.url;
        let clean_url = if url.starts_with("mqtt://") { &url[7..] } else { url };

        if let Some(colon_pos) = clean_url.find(':') {
            let host = clean_url[..colon_pos].to_string();
            let port = clean_url[colon_pos + 1..]
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("Invalid port in broker URL: {}", url))?;
            Ok((host, port))
        } else {
            Ok((clean_url.to_string(), 1883))
        }
    }

    fn qos(&self) -> QoS {
        match self.config.broker.qos {
            0 => QoS::AtMostOnce,
            1 => QoS::AtLeastOnce,
            2 => QoS::ExactlyOnce,
            _ => QoS::AtMostOnce,
        }
    }
}

/// Decode a payload as UTF-8 text; anything else is carried as base64 so
/// the dispatch path always works on a string.
fn decode_payload(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => BASE64.encode(bytes),
    }
}
