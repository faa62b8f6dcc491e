use crate::gallery::{CategoryListing, Direction, Route, SubcategoryListing};
use crate::model::Catalog;
use crate::viewer::{ViewerController, ViewerOptions};

use super::Result;

#[derive(Debug, Clone, Default)]
pub struct GalleryService {
    catalog: Catalog,
    viewer: ViewerOptions,
}

impl GalleryService {
    pub fn new(catalog: Catalog, viewer: ViewerOptions) -> Self {
        Self { catalog, viewer }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn viewer_options(&self) -> ViewerOptions {
        self.viewer
    }

    pub fn category(&self, category: &str) -> Result<CategoryListing> {
        Ok(CategoryListing::build(&self.catalog, category)?)
    }

    pub fn subcategory(&self, category: &str, subcategory: &str) -> Result<SubcategoryListing> {
        Ok(SubcategoryListing::build(&self.catalog, category, subcategory)?)
    }

    pub fn open_viewer(&self, address: &str) -> Result<ViewerController> {
        Ok(ViewerController::open_address(
            &self.catalog,
            address,
            self.viewer,
        )?)
    }

    /// Address of the neighbouring image, if the viewer can move that way.
    pub fn neighbour(viewer: &ViewerController, direction: Direction) -> Option<Route> {
        let navigator = viewer.navigator();
        navigator
            .can_step(direction)
            .then(|| navigator.step(direction).route())
    }
}
