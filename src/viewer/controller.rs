use crate::gallery::{Counter, Direction, Navigator, NotFound, Result, Route, resolve_image};
use crate::model::{Catalog, ImageRecord};

use super::{DismissTarget, ViewerInput, ViewerOptions, swipe_direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerOutcome {
    /// The position changed; the address now points at the new image.
    Moved(Route),
    /// The viewer should close and show this page instead.
    Dismissed(Route),
    Ignored,
}

/// Full-screen viewer state: a navigator plus the address that reproduces it.
#[derive(Debug, Clone)]
pub struct ViewerController {
    navigator: Navigator,
    options: ViewerOptions,
    address: String,
}

impl ViewerController {
    pub fn new(navigator: Navigator, options: ViewerOptions) -> Self {
        let address = navigator.route().address();
        Self {
            navigator,
            options,
            address,
        }
    }

    pub fn open(
        catalog: &Catalog,
        category: &str,
        subcategory: &str,
        position: &str,
        options: ViewerOptions,
    ) -> Result<Self> {
        let navigator = resolve_image(catalog, category, subcategory, position)?;
        Ok(Self::new(navigator, options))
    }

    /// Opens the viewer from an address; only image addresses qualify.
    pub fn open_address(catalog: &Catalog, address: &str, options: ViewerOptions) -> Result<Self> {
        match Route::parse(address)? {
            Route::Image {
                category,
                subcategory,
                position,
            } => Self::open(
                catalog,
                &category,
                &subcategory,
                &position.to_string(),
                options,
            ),
            _ => Err(NotFound::UnknownRoute(address.to_string())),
        }
    }

    pub fn handle(&mut self, input: ViewerInput) -> ViewerOutcome {
        match input {
            ViewerInput::Backward => self.navigate(Direction::Previous),
            ViewerInput::Forward => self.navigate(Direction::Next),
            ViewerInput::Dismiss => ViewerOutcome::Dismissed(self.dismiss_route()),
            ViewerInput::Swipe { dx } => match swipe_direction(dx, self.options.swipe_threshold) {
                Some(direction) => self.navigate(direction),
                None => ViewerOutcome::Ignored,
            },
        }
    }

    fn navigate(&mut self, direction: Direction) -> ViewerOutcome {
        if !self.navigator.can_step(direction) {
            return ViewerOutcome::Ignored;
        }
        self.navigator = self.navigator.step(direction);
        let route = self.navigator.route();
        self.address = route.address();
        log::debug!("viewer moved to {}", self.address);
        ViewerOutcome::Moved(route)
    }

    pub fn dismiss_route(&self) -> Route {
        let slice = self.navigator.slice();
        match self.options.dismiss {
            DismissTarget::Subcategory => Route::Subcategory {
                category: slice.category().to_string(),
                subcategory: slice.subcategory().to_string(),
            },
            DismissTarget::Category => Route::Category {
                category: slice.category().to_string(),
            },
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn options(&self) -> ViewerOptions {
        self.options
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn record(&self) -> &ImageRecord {
        self.navigator.record()
    }

    pub fn counter(&self) -> Counter {
        self.navigator.counter()
    }

    /// The caption under the image; absent when the record has no alt text.
    pub fn caption(&self) -> Option<&str> {
        let alt = self.record().alt.as_str();
        (!alt.trim().is_empty()).then_some(alt)
    }

    pub fn shows_previous_control(&self) -> bool {
        self.navigator.has_previous()
    }

    pub fn shows_next_control(&self) -> bool {
        self.navigator.has_next()
    }
}
