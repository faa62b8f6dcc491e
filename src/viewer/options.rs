use serde::{Deserialize, Serialize};

/// Minimum horizontal travel, in device-independent pixels, for a drag to
/// count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Where "dismiss" leaves the viewer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissTarget {
    #[default]
    Subcategory,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    pub swipe_threshold: f32,
    pub dismiss: DismissTarget,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            dismiss: DismissTarget::default(),
        }
    }
}
