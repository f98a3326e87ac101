use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PRODUCTS: [&str; 5] = ["Laptop", "Smartphone", "Headphones", "Monitor", "Keyboard"];
pub const REGIONS: [&str; 4] = ["North", "South", "East", "West"];

pub const AMOUNT_MIN: f64 = 50.0;
pub const AMOUNT_MAX: f64 = 1500.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesEvent {
    pub id: String,
    pub product: String,
    pub region: String,
    pub amount: f64,
    pub timestamp: String,
}

impl SalesEvent {
    /// Builds one random event. The RNG is passed in so sampling is
    /// reproducible under a fixed seed.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let product = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
        let region = REGIONS[rng.gen_range(0..REGIONS.len())];

        // Round half away from zero to 2 decimals.
        let amount = rng.gen_range(AMOUNT_MIN..=AMOUNT_MAX);
        let amount = (amount * 100.0).round() / 100.0;

        Self {
            id: Uuid::new_v4().to_string(),
            product: product.to_string(),
            region: region.to_string(),
            amount,
            timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }

    /// UTF-8 JSON bytes, the wire encoding handed to the broker client.
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn fields_stay_in_their_domains() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let ev = SalesEvent::generate(&mut rng);
            assert!(PRODUCTS.contains(&ev.product.as_str()), "bad product: {}", ev.product);
            assert!(REGIONS.contains(&ev.region.as_str()), "bad region: {}", ev.region);
        }
    }

    #[test]
    fn amount_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let ev = SalesEvent::generate(&mut rng);
            assert!(ev.amount >= AMOUNT_MIN && ev.amount <= AMOUNT_MAX, "out of range: {}", ev.amount);
            let cents = ev.amount * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "more than 2 decimals: {}", ev.amount);
        }
    }

    #[test]
    fn ids_unique_across_ten_thousand_events() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let ev = SalesEvent::generate(&mut rng);
            assert!(!ev.id.is_empty());
            assert!(seen.insert(ev.id), "duplicate id");
        }
    }

    #[test]
    fn timestamp_is_utc_second_precision() {
        let mut rng = StdRng::seed_from_u64(17);
        let ev = SalesEvent::generate(&mut rng);
        assert!(NaiveDateTime::parse_from_str(&ev.timestamp, "%Y-%m-%dT%H:%M:%SZ").is_ok(),
            "unparseable timestamp: {}", ev.timestamp);
    }

    #[test]
    fn json_round_trips_all_five_fields() {
        let mut rng = StdRng::seed_from_u64(19);
        let ev = SalesEvent::generate(&mut rng);
        let bytes = ev.to_bytes().unwrap();
        let back: SalesEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back.id, ev.id);
        assert_eq!(back.product, ev.product);
        assert_eq!(back.region, ev.region);
        assert_eq!(back.amount, ev.amount);
        assert_eq!(back.timestamp, ev.timestamp);
    }
}
