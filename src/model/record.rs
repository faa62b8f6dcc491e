use serde::{Deserialize, Serialize};

/// One artwork as listed in the static catalog.
///
/// `src` is the canonical asset path (e.g. `/gallery/photos/abstracts/Front.jpg`)
/// and is unique within its `(category, subcategory)` grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRecord {
    pub category: String,
    pub subcategory: String,
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl ImageRecord {
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        src: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn belongs_to(&self, category: &str, subcategory: &str) -> bool {
        self.category == category && self.subcategory == subcategory
    }
}
