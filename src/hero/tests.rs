use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::model::{Catalog, ImageRecord};

use super::{HeroConfig, HeroPool, HeroRotator, RotationTimer, shuffled_sample};

fn catalog(size: usize) -> Catalog {
    let records = (0..size)
        .map(|index| {
            let category = if index % 2 == 0 { "photos" } else { "drawings" };
            ImageRecord::new(
                category,
                "set",
                format!("/gallery/{category}/set/{index}.jpg"),
                format!("Image {index}"),
            )
        })
        .collect();
    Catalog::with_default_categories(records)
}

fn config(pick: usize, seed: u64) -> HeroConfig {
    HeroConfig {
        pick,
        seed: Some(seed),
        ..HeroConfig::default()
    }
}

#[test]
fn pool_is_a_distinct_subset_of_the_catalog() {
    let catalog = catalog(20);
    let pool = HeroPool::sample(&catalog, &config(5, 7));
    assert_eq!(pool.len(), 5);

    let sources = pool
        .records()
        .iter()
        .map(|record| record.src.as_str())
        .collect::<HashSet<_>>();
    assert_eq!(sources.len(), 5);
    assert!(pool.records().iter().all(|record| catalog.records().contains(record)));
}

#[test]
fn pool_is_deterministic_for_a_seed() {
    let catalog = catalog(20);
    let first = HeroPool::sample(&catalog, &config(8, 42));
    let second = HeroPool::sample(&catalog, &config(8, 42));
    assert_eq!(first, second);
    assert_eq!(first.seed(), 42);
}

#[test]
fn pick_larger_than_catalog_takes_everything() {
    let catalog = catalog(3);
    let pool = HeroPool::sample(&catalog, &config(10, 1));
    assert_eq!(pool.len(), 3);
    assert!(HeroPool::sample(&Catalog::default(), &config(10, 1)).is_empty());
}

#[test]
fn shuffle_covers_more_than_one_ordering() {
    let catalog = catalog(10);
    let firsts = (0..32)
        .map(|seed| shuffled_sample(catalog.records(), 1, seed)[0].src.clone())
        .collect::<HashSet<_>>();
    assert!(firsts.len() > 1);
}

#[test]
fn category_filter_limits_candidates() {
    let catalog = catalog(10);
    let hero = HeroConfig {
        category: Some("drawings".to_string()),
        ..config(10, 3)
    };
    let pool = HeroPool::sample(&catalog, &hero);
    assert_eq!(pool.len(), 5);
    assert!(pool.records().iter().all(|record| record.category == "drawings"));
}

#[test]
fn single_image_pool_never_rotates() {
    let catalog = catalog(20);
    let pool = HeroPool::sample(&catalog, &config(1, 9));
    let now = Instant::now();
    let mut rotator = HeroRotator::start(pool, Duration::from_millis(100), now);
    assert!(rotator.is_degenerate());
    assert!(!rotator.is_running());
    assert!(!rotator.shows_controls());
    assert!(!rotator.tick(now + Duration::from_secs(60)));
    rotator.next(now);
    assert_eq!(rotator.index(), 0);
    assert!(rotator.time_until_next(now).is_none());
}

#[test]
fn timer_advances_circularly() {
    let pool = HeroPool::from_records(catalog(3).records().to_vec());
    let start = Instant::now();
    let interval = Duration::from_millis(6000);
    let mut rotator = HeroRotator::start(pool, interval, start);

    assert!(!rotator.tick(start + Duration::from_millis(5999)));
    assert!(rotator.tick(start + interval));
    assert_eq!(rotator.index(), 1);
    assert!(rotator.tick(start + interval * 2));
    assert!(rotator.tick(start + interval * 3));
    assert_eq!(rotator.index(), 0);
}

#[test]
fn manual_steps_wrap_and_restart_the_countdown() {
    let pool = HeroPool::from_records(catalog(4).records().to_vec());
    let start = Instant::now();
    let interval = Duration::from_millis(1000);
    let mut rotator = HeroRotator::start(pool, interval, start);

    rotator.previous(start);
    assert_eq!(rotator.index(), 3);
    rotator.next(start);
    rotator.next(start);
    assert_eq!(rotator.index(), 1);

    let clicked = start + Duration::from_millis(900);
    rotator.next(clicked);
    assert_eq!(rotator.index(), 2);
    assert!(!rotator.tick(start + interval));
    assert_eq!(rotator.time_until_next(start + interval), Some(Duration::from_millis(900)));
    assert!(rotator.tick(clicked + interval));
    assert_eq!(rotator.index(), 3);
}

#[test]
fn suspended_rotator_stops_advancing() {
    let pool = HeroPool::from_records(catalog(4).records().to_vec());
    let start = Instant::now();
    let interval = Duration::from_millis(500);
    let mut rotator = HeroRotator::start(pool, interval, start);
    rotator.suspend();
    assert!(!rotator.is_running());
    assert!(!rotator.tick(start + interval * 10));
    assert_eq!(rotator.index(), 0);

    let resumed = start + interval * 10;
    rotator.resume(resumed);
    assert!(rotator.is_running());
    assert!(rotator.tick(resumed + interval));
    assert_eq!(rotator.index(), 1);
}

#[test]
fn rotation_timer_rearms_from_poll_time() {
    let start = Instant::now();
    let mut timer = RotationTimer::start(Duration::from_millis(10), start);
    assert_eq!(timer.remaining(start), Duration::from_millis(10));
    let late = start + Duration::from_millis(25);
    assert!(timer.poll(late));
    assert!(!timer.poll(late));
    assert_eq!(timer.remaining(late), Duration::from_millis(10));
}

#[test]
fn default_config_values() {
    let config = HeroConfig::default();
    assert_eq!(config.interval(), Duration::from_millis(8000));
    assert_eq!(config.pick, 8);
    let zero = HeroConfig {
        interval_ms: 0,
        ..HeroConfig::default()
    };
    assert_eq!(zero.interval(), Duration::from_millis(1));
}
