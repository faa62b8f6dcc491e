mod asset_service;
mod context;
mod error;
mod gallery_service;
mod hero_service;
mod view;


pub use asset_service::AssetService;
pub use context::{AppContext, DEFAULT_CONFIG_FILE};
pub use error::{AppError, Result};
pub use gallery_service::GalleryService;
pub use hero_service::HeroService;
pub use view::{CategoryLink, HeroSlide, HomeView, ImageView, View};
