mod controller;
mod input;
mod options;

#[cfg(test)]
mod tests;

pub use controller::{ViewerController, ViewerOutcome};
pub use input::{SwipeTracker, ViewerInput, ViewerKey, swipe_direction};
pub use options::{DEFAULT_SWIPE_THRESHOLD, DismissTarget, ViewerOptions};
