use crate::gallery::Direction;

/// Discrete input the viewer reacts to, independent of the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerInput {
    Backward,
    Forward,
    Dismiss,
    /// A finished drag; `dx` is the horizontal displacement at release,
    /// positive to the right.
    Swipe { dx: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl ViewerKey {
    pub fn input(self) -> ViewerInput {
        match self {
            Self::ArrowLeft => ViewerInput::Backward,
            Self::ArrowRight => ViewerInput::Forward,
            Self::Escape => ViewerInput::Dismiss,
        }
    }
}

/// Rightward drags go back, leftward drags go forward. Drags shorter than
/// `threshold` do nothing.
pub fn swipe_direction(dx: f32, threshold: f32) -> Option<Direction> {
    if !dx.is_finite() {
        None
    } else if dx >= threshold {
        Some(Direction::Previous)
    } else if dx <= -threshold {
        Some(Direction::Next)
    } else {
        None
    }
}

/// Follows one touch/pointer drag from press to release.
///
/// Only the start and the last seen x coordinate matter; there is no
/// velocity tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    last_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = Some(x);
    }

    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }

    pub fn finish(&mut self) -> Option<ViewerInput> {
        let start = self.start_x.take()?;
        let end = self.last_x.take().unwrap_or(start);
        Some(ViewerInput::Swipe { dx: end - start })
    }
}
