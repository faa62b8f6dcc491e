use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_INTERVAL_MS: u64 = 8000;
pub const DEFAULT_PICK: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub interval_ms: u64,
    pub pick: usize,
    /// Fixed shuffle seed; a fresh one is drawn per load when unset.
    pub seed: Option<u64>,
    /// Restricts the pool to one category.
    pub category: Option<String>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            pick: DEFAULT_PICK,
            seed: None,
            category: None,
        }
    }
}

impl HeroConfig {
    /// Rotation period, never shorter than one millisecond.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}
