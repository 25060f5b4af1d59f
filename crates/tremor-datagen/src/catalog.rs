//! Quake catalog generation.
//!
//! Events follow InSight mission statistics: 70% minor, 25% moderate,
//! 5% major, magnitudes uniform within the category band and rounded to
//! two decimals. Timestamps are uniform over the configured span and
//! the catalog is sorted chronologically before ids are assigned, so
//! `"M001"` is always the earliest event.
//!
//! Constructed via the builder pattern: [`CatalogBuilder`].

use indexmap::IndexMap;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tremor_core::{QuakeCategory, QuakeEvent};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Builder for a chronological quake catalog.
///
/// Defaults: 10 events over a 30 day span, seed 42.
pub struct CatalogBuilder {
    count: usize,
    days_span: f64,
    seed: u64,
}

impl CatalogBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            count: 10,
            days_span: 30.0,
            seed: 42,
        }
    }

    /// Set the number of events to generate (default: 10).
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the span in days over which timestamps fall (default: 30).
    pub fn days_span(mut self, days_span: f64) -> Self {
        self.days_span = days_span;
        self
    }

    /// Set the generation seed (default: 42).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate the catalog, keyed by event id in chronological order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the count is zero or the span is not finite and
    /// strictly positive.
    pub fn build(self) -> Result<IndexMap<String, QuakeEvent>, String> {
        if self.count == 0 {
            return Err("count must be >= 1".to_string());
        }
        if !(self.days_span > 0.0 && self.days_span.is_finite()) {
            return Err(format!(
                "days_span must be finite and > 0, got {}",
                self.days_span
            ));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut events = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            events.push(generate_event(&mut rng, self.days_span));
        }

        // Sort before id assignment so ids are chronological.
        events.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

        let mut catalog = IndexMap::with_capacity(self.count);
        for (i, mut event) in events.into_iter().enumerate() {
            event.id = format!("M{:03}", i + 1);
            catalog.insert(event.id.clone(), event);
        }
        Ok(catalog)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_event(rng: &mut ChaCha8Rng, days_span: f64) -> QuakeEvent {
    let timestamp = rng.random_range(0.0..days_span) * SECONDS_PER_DAY;

    let category = match rng.random::<f64>() {
        r if r < 0.70 => QuakeCategory::Minor,
        r if r < 0.95 => QuakeCategory::Moderate,
        _ => QuakeCategory::Major,
    };
    let (lo, hi) = category.magnitude_range();
    let magnitude = (rng.random_range(lo..hi) * 100.0).round() / 100.0;

    let latitude = rng.random_range(-90.0..90.0);
    let longitude = rng.random_range(-180.0..180.0);
    let depth_km = rng.random_range(10.0..50.0);

    QuakeEvent::with_default_velocities(
        String::new(),
        timestamp,
        magnitude,
        latitude,
        longitude,
        depth_km,
        category,
    )
}
