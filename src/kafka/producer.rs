use anyhow::Result;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{BaseProducer, BaseRecord, Producer};
use std::time::Duration;

use crate::kafka::config::KafkaConfig;

/// Where encoded events go. The driver only ever talks to this trait, so
/// tests can swap the broker for an in-memory sink.
pub trait EventSink {
    fn send(&self, topic: &str, payload: &[u8]) -> Result<()>;
}

pub struct KafkaSink {
    producer: BaseProducer,
}

impl KafkaSink {
    pub fn new(cfg: &KafkaConfig) -> Result<Self> {
        let producer = ClientConfig::new()
            .set("bootstrap.servers", &cfg.brokers)
            .create::<BaseProducer>()?;

        Ok(Self { producer })
    }
}

impl EventSink for KafkaSink {
    /// Fire-and-forget: enqueue the record and return without waiting for
    /// broker acknowledgment. Only a full local queue surfaces as an error.
    fn send(&self, topic: &str, payload: &[u8]) -> Result<()> {
        match self
            .producer
            .send(BaseRecord::<(), [u8]>::to(topic).payload(payload))
        {
            Ok(_) => {}
            Err((err, _record)) => {
                return Err(anyhow::anyhow!("Kafka send error: {}", err));
            }
        }

        // Serve delivery callbacks without blocking the tick.
        self.producer.poll(Duration::ZERO);
        Ok(())
    }
}

impl Drop for KafkaSink {
    fn drop(&mut self) {
        if let Err(e) = self.producer.flush(Duration::from_secs(1)) {
            log::warn!("Flush error on shutdown (ignored): {}", e);
        }
    }
}
