use std::time::Instant;

use crate::gallery::{CategoryListing, Direction, SubcategoryListing};
use crate::hero::HeroRotator;
use crate::runtime::{AppContext, HomeView, View};
use crate::viewer::{SwipeTracker, ViewerController, ViewerInput};

/// What the window currently shows. Rebuilt from the address on every
/// navigation.
pub(super) enum Page {
    Home {
        view: HomeView,
        rotator: HeroRotator,
    },
    Category(CategoryListing),
    Subcategory(SubcategoryListing),
    Image {
        viewer: ViewerController,
        swipe: SwipeTracker,
    },
    NotFound {
        address: String,
        message: String,
    },
}

impl Page {
    pub(super) fn open(context: &AppContext, address: &str, now: Instant) -> Self {
        let view = match context.resolve(address) {
            Ok(view) => view,
            Err(error) => return Self::not_found(address, error.to_string()),
        };
        match view {
            View::Home(view) => Self::Home {
                view,
                rotator: context
                    .hero_service()
                    .rotator(context.hero_pool().clone(), now),
            },
            View::Category(listing) => Self::Category(listing),
            View::Subcategory(listing) => Self::Subcategory(listing),
            View::Image(image) => match context.gallery_service().open_viewer(&image.address) {
                Ok(viewer) => Self::Image {
                    viewer,
                    swipe: SwipeTracker::default(),
                },
                Err(error) => Self::not_found(address, error.to_string()),
            },
        }
    }

    fn not_found(address: &str, message: String) -> Self {
        log::warn!("{address}: {message}");
        Self::NotFound {
            address: address.to_string(),
            message,
        }
    }

    /// Called before the page is replaced.
    pub(super) fn leave(&mut self) {
        if let Self::Home { rotator, .. } = self {
            rotator.suspend();
        }
    }

    pub(super) fn title(&self) -> String {
        match self {
            Self::Home { .. } => "Home".to_string(),
            Self::Category(listing) => listing.title.clone(),
            Self::Subcategory(listing) => listing.title.clone(),
            Self::Image { viewer, .. } => match viewer.caption() {
                Some(caption) => format!("{caption} ({})", viewer.counter()),
                None => viewer.counter().to_string(),
            },
            Self::NotFound { .. } => "Not found".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum UiAction {
    Navigate(String),
    Viewer(ViewerInput),
    Hero(Direction),
}
