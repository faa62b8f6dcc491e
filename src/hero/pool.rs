use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg64;

use crate::model::{Catalog, ImageRecord};

use super::HeroConfig;

/// The images the hero cycles through, fixed for the lifetime of one load.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPool {
    records: Arc<[ImageRecord]>,
    seed: u64,
}

impl HeroPool {
    pub fn sample(catalog: &Catalog, config: &HeroConfig) -> Self {
        let seed = config.seed.unwrap_or_else(load_seed);
        let candidates = match &config.category {
            Some(category) => catalog.in_category(category).cloned().collect::<Vec<_>>(),
            None => catalog.records().to_vec(),
        };
        let records = shuffled_sample(&candidates, config.pick, seed);
        log::debug!(
            "hero pool: {} of {} candidates (seed {seed})",
            records.len(),
            candidates.len()
        );
        Self {
            records: records.into(),
            seed,
        }
    }

    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        Self {
            records: records.into(),
            seed: 0,
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fewer than two images: nothing to rotate, no controls.
    pub fn is_degenerate(&self) -> bool {
        self.records.len() < 2
    }
}

/// Draws `min(pick, records.len())` distinct records in a seeded random order.
pub fn shuffled_sample(records: &[ImageRecord], pick: usize, seed: u64) -> Vec<ImageRecord> {
    let mut order = (0..records.len()).collect::<Vec<_>>();
    let mut rng = Pcg64::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
        .into_iter()
        .take(pick)
        .map(|index| records[index].clone())
        .collect()
}

/// Per-load seed taken from the wall clock.
pub fn load_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
