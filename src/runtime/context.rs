use std::path::{Path, PathBuf};

use crate::assets::AssetSize;
use crate::config::{SiteConfig, load_config};
use crate::gallery::{Direction, Route, category_label};
use crate::hero::HeroPool;
use crate::model::{Catalog, load_catalog};

use super::view::{CategoryLink, HeroSlide, HomeView, ImageView, View};
use super::{AssetService, GalleryService, HeroService, Result};

/// Looked up in the working directory when no configuration is given.
pub const DEFAULT_CONFIG_FILE: &str = "site.yaml";

/// Everything one load of the site needs: configuration, the catalog, and
/// the hero pool drawn for this load.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: SiteConfig,
    gallery_service: GalleryService,
    asset_service: AssetService,
    hero_service: HeroService,
    hero_pool: HeroPool,
}

impl AppContext {
    pub fn new(config: SiteConfig, catalog: Catalog) -> Self {
        let gallery_service = GalleryService::new(catalog, config.viewer);
        let asset_service = AssetService::new(config.assets.clone(), config.asset_root.clone());
        let hero_service = HeroService::new(config.hero.clone());
        let hero_pool = hero_service.sample(gallery_service.catalog());
        Self {
            config,
            gallery_service,
            asset_service,
            hero_service,
            hero_pool,
        }
    }

    /// Reads the catalog named by `config` and builds the context.
    pub fn load(config: SiteConfig) -> Result<Self> {
        config.validate()?;
        let catalog = load_catalog(&config.catalog, &config.categories)?;
        Ok(Self::new(config, catalog))
    }

    /// Loads the configuration file (or [`DEFAULT_CONFIG_FILE`] when present,
    /// else built-in defaults), applies a catalog override, then loads.
    pub fn open(config_path: Option<&Path>, catalog: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => load_config(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => load_config(DEFAULT_CONFIG_FILE)?,
            None => SiteConfig::default(),
        };
        if let Some(catalog) = catalog {
            config.catalog = catalog;
        }
        Self::load(config)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        self.gallery_service.catalog()
    }

    pub fn gallery_service(&self) -> &GalleryService {
        &self.gallery_service
    }

    pub fn asset_service(&self) -> &AssetService {
        &self.asset_service
    }

    pub fn hero_service(&self) -> &HeroService {
        &self.hero_service
    }

    pub fn hero_pool(&self) -> &HeroPool {
        &self.hero_pool
    }

    /// Rebuilds the page for `address` from the catalog alone.
    pub fn resolve(&self, address: &str) -> Result<View> {
        let route = Route::parse(address)?;
        log::debug!("resolving {address} as {route:?}");
        match route {
            Route::Home => Ok(View::Home(self.home())),
            Route::Category { category } => {
                Ok(View::Category(self.gallery_service.category(&category)?))
            }
            Route::Subcategory {
                category,
                subcategory,
            } => Ok(View::Subcategory(
                self.gallery_service.subcategory(&category, &subcategory)?,
            )),
            Route::Image { .. } => Ok(View::Image(self.image_view(address)?)),
        }
    }

    fn home(&self) -> HomeView {
        let hero = self
            .hero_pool
            .records()
            .iter()
            .map(|record| HeroSlide {
                record: record.clone(),
                asset: self.asset_service.url(&record.src, AssetSize::Large),
            })
            .collect();
        let categories = self
            .catalog()
            .categories()
            .iter()
            .map(|category| CategoryLink {
                category: category.clone(),
                label: category_label(category),
                href: Route::Category {
                    category: category.clone(),
                }
                .address(),
            })
            .collect();
        HomeView {
            hero,
            interval_ms: self.hero_service.config().interval_ms,
            controls: !self.hero_pool.is_degenerate(),
            categories,
        }
    }

    fn image_view(&self, address: &str) -> Result<ImageView> {
        let viewer = self.gallery_service.open_viewer(address)?;
        let record = viewer.record().clone();
        Ok(ImageView {
            address: viewer.address().to_string(),
            counter: viewer.counter().to_string(),
            caption: viewer.caption().map(str::to_string),
            asset: self.asset_service.url(&record.src, AssetSize::Large),
            previous: GalleryService::neighbour(&viewer, Direction::Previous)
                .map(|route| route.address()),
            next: GalleryService::neighbour(&viewer, Direction::Next).map(|route| route.address()),
            close: viewer.dismiss_route().address(),
            record,
        })
    }
}
