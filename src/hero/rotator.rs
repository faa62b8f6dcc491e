use std::time::{Duration, Instant};

use crate::model::ImageRecord;

use super::HeroPool;

/// A recurring deadline. Owned by the rotator; dropping it cancels rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTimer {
    interval: Duration,
    due: Instant,
}

impl RotationTimer {
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            due: now + interval,
        }
    }

    /// Returns true once per elapsed period and re-arms from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.due {
            return false;
        }
        self.due = now + self.interval;
        true
    }

    pub fn restart(&mut self, now: Instant) {
        self.due = now + self.interval;
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Circular slideshow over a [`HeroPool`].
///
/// Manual steps restart the countdown so an image the visitor just picked
/// stays up for a full interval.
#[derive(Debug, Clone)]
pub struct HeroRotator {
    pool: HeroPool,
    index: usize,
    interval: Duration,
    timer: Option<RotationTimer>,
}

impl HeroRotator {
    /// A stopped rotator showing the first image.
    pub fn new(pool: HeroPool, interval: Duration) -> Self {
        Self {
            pool,
            index: 0,
            interval,
            timer: None,
        }
    }

    pub fn start(pool: HeroPool, interval: Duration, now: Instant) -> Self {
        let mut rotator = Self::new(pool, interval);
        rotator.resume(now);
        rotator
    }

    /// Arms the timer; a degenerate pool never gets one.
    pub fn resume(&mut self, now: Instant) {
        if self.pool.is_degenerate() || self.timer.is_some() {
            return;
        }
        self.timer = Some(RotationTimer::start(self.interval, now));
    }

    /// Cancels the timer while the hero is off screen.
    pub fn suspend(&mut self) {
        self.timer = None;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_degenerate(&self) -> bool {
        self.pool.is_degenerate()
    }

    pub fn shows_controls(&self) -> bool {
        !self.pool.is_degenerate()
    }

    /// Advances one step if the period has elapsed; returns whether it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.poll(now) {
            return false;
        }
        self.index = (self.index + 1) % self.pool.len();
        true
    }

    pub fn next(&mut self, now: Instant) {
        if self.pool.is_degenerate() {
            return;
        }
        self.index = (self.index + 1) % self.pool.len();
        self.restart_timer(now);
    }

    pub fn previous(&mut self, now: Instant) {
        if self.pool.is_degenerate() {
            return;
        }
        let len = self.pool.len();
        self.index = (self.index + len - 1) % len;
        self.restart_timer(now);
    }

    fn restart_timer(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            timer.restart(now);
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&ImageRecord> {
        self.pool.get(self.index)
    }

    pub fn pool(&self) -> &HeroPool {
        &self.pool
    }

    /// How long until the next automatic step, if the timer is armed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.timer.map(|timer| timer.remaining(now))
    }
}
