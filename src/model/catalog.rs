use std::collections::HashSet;
use std::sync::Arc;

use super::ImageRecord;

pub const DEFAULT_CATEGORIES: [&str; 2] = ["photos", "drawings"];

/// The full, read-only list of image records plus the closed set of
/// categories the gallery recognizes.
///
/// Cloning is cheap: both lists are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Arc<[ImageRecord]>,
    categories: Arc<[String]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_default_categories(Vec::new())
    }
}

impl Catalog {
    pub fn new<I, S>(records: Vec<ImageRecord>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: records.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_default_categories(records: Vec<ImageRecord>) -> Self {
        Self::new(records, DEFAULT_CATEGORIES)
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_recognized(&self, category: &str) -> bool {
        self.categories.iter().any(|known| known == category)
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ImageRecord> {
        self.records
            .iter()
            .filter(move |record| record.category == category)
    }

    /// Distinct subcategories of `category`, in order of first appearance.
    pub fn subcategories(&self, category: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| record.category == category)
            .map(|record| record.subcategory.as_str())
            .filter(|subcategory| seen.insert(*subcategory))
            .collect()
    }

    /// Records whose `src` already appeared earlier in the same
    /// `(category, subcategory)` grouping.
    pub fn duplicate_sources(&self) -> Vec<&ImageRecord> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| {
                !seen.insert((
                    record.category.as_str(),
                    record.subcategory.as_str(),
                    record.src.as_str(),
                ))
            })
            .collect()
    }
}
