use serde::Serialize;

use crate::gallery::{CategoryListing, SubcategoryListing};
use crate::model::ImageRecord;

/// A fully resolved page, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum View {
    Home(HomeView),
    Category(CategoryListing),
    Subcategory(SubcategoryListing),
    Image(ImageView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSlide {
    pub record: ImageRecord,
    pub asset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLink {
    pub category: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub hero: Vec<HeroSlide>,
    pub interval_ms: u64,
    pub controls: bool,
    pub categories: Vec<CategoryLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageView {
    pub address: String,
    pub counter: String,
    pub caption: Option<String>,
    pub record: ImageRecord,
    pub asset: String,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub close: String,
}
