use std::collections::HashMap;

use crate::model::{Catalog, ImageRecord};

use super::{NotFound, Result};

/// Catalog records of one `(category, subcategory)`, in catalog order.
#[derive(Debug, Clone)]
pub struct GallerySlice {
    catalog: Catalog,
    category: String,
    subcategory: String,
    indices: Vec<usize>,
    by_src: HashMap<String, usize>,
}

impl GallerySlice {
    pub fn build(catalog: &Catalog, category: &str, subcategory: &str) -> Result<Self> {
        if !catalog.is_recognized(category) {
            return Err(NotFound::UnknownCategory(category.to_string()));
        }

        let indices = catalog
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| record.belongs_to(category, subcategory))
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        if indices.is_empty() {
            return Err(NotFound::EmptyGallery {
                category: category.to_string(),
                subcategory: subcategory.to_string(),
            });
        }

        let mut by_src = HashMap::with_capacity(indices.len());
        for (position, index) in indices.iter().enumerate() {
            by_src
                .entry(catalog.records()[*index].src.clone())
                .or_insert(position);
        }

        Ok(Self {
            catalog: catalog.clone(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            indices,
            by_src,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false for a built slice; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&ImageRecord> {
        self.indices
            .get(position)
            .and_then(|index| self.catalog.get(*index))
    }

    /// Panics when `position >= len`; `Navigator` only asks for checked positions.
    pub(super) fn record_at(&self, position: usize) -> &ImageRecord {
        &self.catalog.records()[self.indices[position]]
    }

    pub fn position_of(&self, src: &str) -> Option<usize> {
        self.by_src.get(src).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.indices
            .iter()
            .filter_map(|index| self.catalog.get(*index))
    }
}
