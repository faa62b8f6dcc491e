//! Gallery addressing and navigation.
//!
//! A [`GallerySlice`] is the ordered run of catalog records for one
//! `(category, subcategory)` pair; a [`Navigator`] is a position inside it.
//! Every page is addressable through a [`Route`], and every route can be
//! rebuilt from the catalog alone.

mod error;
mod listing;
mod navigator;
mod route;
mod slice;

#[cfg(test)]
mod tests;

pub use error::{NotFound, Result};
pub use listing::{
    CategoryListing, ImageLink, RelatedLink, SubcategoryListing, SubcategorySection,
    category_label, subcategory_title, works_label,
};
pub use navigator::{Counter, Direction, Navigator};
pub use route::{GALLERY_ROOT, Route, parse_position};
pub use slice::GallerySlice;

use crate::model::Catalog;

/// Rebuilds the viewer state for `/gallery/{category}/{subcategory}/{position}`.
pub fn resolve_image(
    catalog: &Catalog,
    category: &str,
    subcategory: &str,
    position: &str,
) -> Result<Navigator> {
    let slice = GallerySlice::build(catalog, category, subcategory)?;
    let position = parse_position(position)?;
    Navigator::new(slice, position)
}
