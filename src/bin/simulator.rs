//! Equipment telemetry simulator.
//!
//! Publishes fabricated sensor readings for four equipment units, with an
//! occasional out-of-range value that also raises an alarm, so the intake
//! service can be exercised without factory hardware.

use clap::Parser;
use rand::Rng;
use rumqttc::{AsyncClient, MqttOptions, QoS};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::Duration;

const EQUIPMENT: [&str; 4] = ["EQ-001", "EQ-002", "EQ-003", "EQ-004"];

/// MES telemetry simulator - publishes fake equipment data over MQTT
#[derive(Parser)]
#[command(name = "mes-simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// MQTT broker host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// MQTT broker port
    #[arg(long, default_value_t = 1883)]
    port: u16,

    /// Delay between publish cycles in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    interval_ms: u64,

    /// Topic for sensor readings
    #[arg(long, default_value = "factory/sensor/data")]
    sensor_topic: String,

    /// Topic for alarms
    #[arg(long, default_value = "factory/alarm")]
    alarm_topic: String,
}

/// One generated publish cycle for a single equipment unit.
struct Sample {
    reading: serde_json::Value,
    alarm: Option<serde_json::Value>,
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a reading around the nominal operating point, with a ~10%
/// chance of an out-of-range excursion that also raises an alarm.
fn generate_sample(equipment_id: &str) -> Sample {
    let mut rng = rand::rng();

    let mut temperature = 70.0 + rng.random_range(-10.0..20.0);
    let mut pressure = 120.0 + rng.random_range(-20.0..40.0);
    let vibration = 2.5 + rng.random_range(-1.0..1.0);
    let speed = rng.random_range(950..=1000);

    let mut alarm = None;
    if rng.random_bool(0.1) {
        let timestamp = now_millis().to_string();
        if rng.random_bool(0.5) {
            temperature = 70.0 + rng.random_range(15.0..30.0);
            alarm = Some(json!({
                "type": "OVERHEAT",
                "message": format!("{equipment_id} temperature {} exceeds limit", round2(temperature)),
                "timestamp": timestamp,
            }));
        } else {
            pressure = 120.0 + rng.random_range(35.0..60.0);
            alarm = Some(json!({
                "type": "OVERPRESSURE",
                "message": format!("{equipment_id} pressure {} exceeds limit", round2(pressure)),
                "timestamp": timestamp,
            }));
        }
    }

    let reading = json!({
        "equipment_id": equipment_id,
        "temperature": round2(temperature),
        "pressure": round2(pressure),
        "vibration": round2(vibration),
        "speed": speed,
        "timestamp": now_millis(),
    });

    Sample { reading, alarm }
}

async fn publish(client: &AsyncClient, topic: &str, payload: &serde_json::Value) {
    if let Err(e) = client
        .publish(topic, QoS::AtMostOnce, false, payload.to_string())
        .await
    {
        tracing::warn!("Publish to '{}' failed: {}", topic, e);
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let client_id = format!("mes-simulator_{}", uuid::Uuid::new_v4());
    let mqttoptions = MqttOptions::new(&client_id, &cli.host, cli.port);
    let (client, mut eventloop) = AsyncClient::new(mqttoptions, 10);

    // The event loop must be polled for publishes to go out.
    tokio::spawn(async move {
        loop {
            if let Err(e) = eventloop.poll().await {
                tracing::error!("MQTT connection error: {}", e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    });

    tracing::info!(
        "Simulator publishing to {}:{} every {}ms",
        cli.host,
        cli.port,
        cli.interval_ms
    );

    loop {
        for equipment_id in EQUIPMENT {
            let sample = generate_sample(equipment_id);

            publish(&client, &cli.sensor_topic, &sample.reading).await;
            tracing::info!("Published reading for {}", equipment_id);

            if let Some(alarm) = &sample.alarm {
                publish(&client, &cli.alarm_topic, alarm).await;
                tracing::warn!("Published alarm for {}", equipment_id);
            }
        }

        tokio::time::sleep(Duration::from_millis(cli.interval_ms)).await;
    }
}
