use serde::Serialize;

use crate::model::{Catalog, ImageRecord};

use super::{GallerySlice, NotFound, Result, Route};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageLink {
    pub href: String,
    pub position: usize,
    pub record: ImageRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcategorySection {
    pub subcategory: String,
    pub title: String,
    pub href: String,
    pub images: Vec<ImageLink>,
}

/// The category page: one horizontally scrolling section per subcategory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub category: String,
    pub title: String,
    pub sections: Vec<SubcategorySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedLink {
    pub subcategory: String,
    pub title: String,
    pub href: String,
}

/// The subcategory page: a grid of works plus links to sibling subcategories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcategoryListing {
    pub category: String,
    pub subcategory: String,
    pub title: String,
    pub works: String,
    pub back_href: String,
    pub back_label: String,
    pub images: Vec<ImageLink>,
    pub related: Vec<RelatedLink>,
}

impl CategoryListing {
    pub fn build(catalog: &Catalog, category: &str) -> Result<Self> {
        if !catalog.is_recognized(category) {
            return Err(NotFound::UnknownCategory(category.to_string()));
        }
        let sections = catalog
            .subcategories(category)
            .into_iter()
            .map(|subcategory| {
                let slice = GallerySlice::build(catalog, category, subcategory)?;
                Ok(SubcategorySection {
                    subcategory: subcategory.to_string(),
                    title: subcategory_title(subcategory),
                    href: subcategory_route(category, subcategory).address(),
                    images: image_links(&slice),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            category: category.to_string(),
            title: category_label(category),
            sections,
        })
    }
}

impl SubcategoryListing {
    pub fn build(catalog: &Catalog, category: &str, subcategory: &str) -> Result<Self> {
        let slice = GallerySlice::build(catalog, category, subcategory)?;
        let related = catalog
            .subcategories(category)
            .into_iter()
            .filter(|other| *other != subcategory)
            .map(|other| RelatedLink {
                subcategory: other.to_string(),
                title: subcategory_title(other),
                href: subcategory_route(category, other).address(),
            })
            .collect();
        Ok(Self {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            title: subcategory_title(subcategory),
            works: works_label(slice.len()),
            back_href: Route::Category {
                category: category.to_string(),
            }
            .address(),
            back_label: format!("Back to {}", category_label(category)),
            images: image_links(&slice),
            related,
        })
    }
}

fn subcategory_route(category: &str, subcategory: &str) -> Route {
    Route::Subcategory {
        category: category.to_string(),
        subcategory: subcategory.to_string(),
    }
}

fn image_links(slice: &GallerySlice) -> Vec<ImageLink> {
    slice
        .iter()
        .enumerate()
        .map(|(position, record)| ImageLink {
            href: Route::Image {
                category: slice.category().to_string(),
                subcategory: slice.subcategory().to_string(),
                position,
            }
            .address(),
            position,
            record: record.clone(),
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"photos"` → `"Photos"`.
pub fn category_label(category: &str) -> String {
    capitalize(category)
}

/// `"black_and_white"` → `"Black And White"`.
pub fn subcategory_title(subcategory: &str) -> String {
    subcategory
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn works_label(count: usize) -> String {
    if count == 1 {
        "1 work".to_string()
    } else {
        format!("{count} works")
    }
}
