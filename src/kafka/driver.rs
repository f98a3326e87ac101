use anyhow::Result;
use log::info;
use rand::Rng;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::kafka::event::SalesEvent;
use crate::kafka::producer::EventSink;

/// Owns the sink and the RNG; one `tick` produces exactly one event.
pub struct SalesProducer<S: EventSink, R: Rng> {
    sink: S,
    rng: R,
    topic: String,
    tick_interval: Duration,
}

impl<S: EventSink, R: Rng> SalesProducer<S, R> {
    pub fn new(sink: S, rng: R, topic: impl Into<String>, tick_interval: Duration) -> Self {
        Self {
            sink,
            rng,
            topic: topic.into(),
            tick_interval,
        }
    }

    /// Generate one event, publish it, log it.
    pub fn produce_event(&mut self) -> Result<SalesEvent> {
        let event = SalesEvent::generate(&mut self.rng);
        let bytes = event.to_bytes()?;
        self.sink.send(&self.topic, &bytes)?;

        println!("Produced sales event: {}", String::from_utf8_lossy(&bytes));
        Ok(event)
    }

    /// Tick until told to stop. The sleep doubles as the cancellation
    /// point: a message (or a dropped sender) on `stop` ends the loop.
    /// Publish errors propagate out, there is no retry.
    pub fn run(&mut self, stop: Receiver<()>) -> Result<()> {
        loop {
            self.produce_event()?;

            match stop.recv_timeout(self.tick_interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    info!("🛑 Stop signal received, shutting down");
                    return Ok(());
                }
            }
        }
    }
}
