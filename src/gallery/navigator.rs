use std::fmt;
use std::sync::Arc;

use crate::model::ImageRecord;

use super::{GallerySlice, NotFound, Result, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// 1-based "position / total" shown next to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

/// A valid position inside a gallery slice.
///
/// The sequence is bounded: stepping past either end leaves the state as is.
#[derive(Debug, Clone)]
pub struct Navigator {
    slice: Arc<GallerySlice>,
    position: usize,
}

impl Navigator {
    pub fn new(slice: impl Into<Arc<GallerySlice>>, position: usize) -> Result<Self> {
        let slice = slice.into();
        if position >= slice.len() {
            return Err(NotFound::PositionOutOfRange {
                position,
                len: slice.len(),
            });
        }
        Ok(Self { slice, position })
    }

    pub fn slice(&self) -> &GallerySlice {
        &self.slice
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Always false: a navigator only exists over a non-empty slice.
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    pub fn has_next(&self) -> bool {
        self.position + 1 < self.slice.len()
    }

    pub fn previous(&self) -> Self {
        self.step(Direction::Previous)
    }

    pub fn next(&self) -> Self {
        self.step(Direction::Next)
    }

    pub fn step(&self, direction: Direction) -> Self {
        let position = match direction {
            Direction::Previous if self.has_previous() => self.position - 1,
            Direction::Next if self.has_next() => self.position + 1,
            _ => self.position,
        };
        Self {
            slice: Arc::clone(&self.slice),
            position,
        }
    }

    pub fn can_step(&self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.has_previous(),
            Direction::Next => self.has_next(),
        }
    }

    pub fn record(&self) -> &ImageRecord {
        self.slice.record_at(self.position)
    }

    pub fn counter(&self) -> Counter {
        Counter {
            current: self.position + 1,
            total: self.slice.len(),
        }
    }

    pub fn route(&self) -> Route {
        Route::Image {
            category: self.slice.category().to_string(),
            subcategory: self.slice.subcategory().to_string(),
            position: self.position,
        }
    }
}
