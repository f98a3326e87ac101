mod kafka;

use anyhow::Result;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc;

use kafka::config::KafkaConfig;
use kafka::driver::SalesProducer;
use kafka::producer::KafkaSink;

fn main() -> Result<()> {
    // Init logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Load .env if present; the defaults cover a local broker anyway.
    if dotenvy::dotenv().is_err() {
        info!("No .env file found, using defaults");
    }

    let cfg = KafkaConfig::new();
    let sink = KafkaSink::new(&cfg)?;
    let mut producer = SalesProducer::new(sink, StdRng::from_entropy(), cfg.topic, cfg.tick_interval);

    info!("✨ Sales producer started, publishing every {:?}", cfg.tick_interval);

    // The sender is held for the whole run; the loop ends only with the
    // process. Tests drive the same loop through the channel.
    let (_stop_tx, stop_rx) = mpsc::channel();
    producer.run(stop_rx)
}
