#![allow(dead_code)]

use clap::Parser;

mod config;
mod core;
mod handlers;
mod input;
mod logging;

/// MES Intake - MQTT telemetry receiver for factory equipment
#[derive(Parser)]
#[command(name = "mes-intake")]
#[command(version = "0.1.0")]
#[command(about = "Subscribes to factory MQTT topics and logs sensor readings and alarms")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "./config/config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging with specified level
    logging::init_logging(&cli.log_level);

    // Load configuration from specified file
    let config = match config::load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load config from '{}': {}", cli.config, e);
            std::process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config::validate_config(&config) {
        tracing::error!("Configuration error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Configuration loaded and validated successfully.");
    tracing::info!("MES intake service starting");
    tracing::info!("Broker: {}", config.broker.url);
    for topic in &config.subscriptions.topics {
        tracing::info!("Subscription topic: {}", topic);
    }

    // The routing table is fixed at startup: sensor data first, alarms second.
    let dispatcher = handlers::build_dispatcher();

    let intake = input::mqtt::MqttIntake::new(config, dispatcher);
    if let Err(e) = intake.run().await {
        tracing::error!("Intake terminated: {e}");
        std::process::exit(1);
    }
}
