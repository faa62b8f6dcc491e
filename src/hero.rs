//! Home page hero: a small, shuffled pool of catalog images shown one at a
//! time, advanced by a timer and by manual previous/next controls.
//!
//! Unlike the gallery viewer the hero wraps around in both directions.

mod config;
mod pool;
mod rotator;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_INTERVAL_MS, DEFAULT_PICK, HeroConfig};
pub use pool::{HeroPool, load_seed, shuffled_sample};
pub use rotator::{HeroRotator, RotationTimer};
