use super::types::Config;

pub fn validate_config(config: &Config) -> Result<(), String> {
    if config.broker.url.is_empty() {
        return Err("Broker URL cannot be empty".into());
    }

    if config.broker.qos > 2 {
        return Err("QoS must be between 0 and 2".into());
    }

    if config.subscriptions.topics.is_empty() {
        return Err("At least one subscription topic must be specified".into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_empty_broker_url() {
        let mut config = Config::default();
        config.broker.url.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_qos() {
        let mut config = Config::default();
        config.broker.qos = 3;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_topic_list() {
        let mut config = Config::default();
        config.subscriptions.topics.clear();
        assert!(validate_config(&config).is_err());
    }
}
