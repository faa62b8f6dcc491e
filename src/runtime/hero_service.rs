use std::time::Instant;

use crate::hero::{HeroConfig, HeroPool, HeroRotator};
use crate::model::Catalog;

#[derive(Debug, Clone, Default)]
pub struct HeroService {
    config: HeroConfig,
}

impl HeroService {
    pub fn new(config: HeroConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn sample(&self, catalog: &Catalog) -> HeroPool {
        HeroPool::sample(catalog, &self.config)
    }

    pub fn rotator(&self, pool: HeroPool, now: Instant) -> HeroRotator {
        HeroRotator::start(pool, self.config.interval(), now)
    }
}
