use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct KafkaConfig {
    pub brokers: String,
    pub topic: String,
    pub tick_interval: Duration,
}

impl KafkaConfig {
    pub fn new() -> Self {
        let cfg = Self {
            brokers: env::var("KAFKA_BROKER")
                .unwrap_or_else(|_| "localhost:9092".to_string()),

            topic: env::var("KAFKA_TOPIC")
                .unwrap_or_else(|_| "sales".to_string()),

            tick_interval: Duration::from_secs(
                env::var("PRODUCE_INTERVAL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3),
            ),
        };

        log::info!("🧩 Loaded Kafka config: {:?}", cfg);
        cfg
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self::new()
    }
}
