use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::AssetLayout;
use crate::hero::HeroConfig;
use crate::model::DEFAULT_CATEGORIES;
use crate::viewer::ViewerOptions;

use super::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// JSON or YAML list of image records.
    pub catalog: PathBuf,
    /// Directory that resolved asset paths (`/images/optimized/...`) live under.
    pub asset_root: PathBuf,
    pub categories: Vec<String>,
    pub assets: AssetLayout,
    pub hero: HeroConfig,
    pub viewer: ViewerOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("data/images.json"),
            asset_root: PathBuf::from("public"),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            assets: AssetLayout::default(),
            hero: HeroConfig::default(),
            viewer: ViewerOptions::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one category must be configured".to_string(),
            ));
        }
        if let Some(blank) = self.categories.iter().find(|c| c.trim().is_empty() || c.contains('/')) {
            return Err(ConfigError::Invalid(format!(
                "category name `{blank}` must be non-empty and contain no `/`"
            )));
        }
        let threshold = self.viewer.swipe_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "viewer swipe_threshold must be a positive number, got {threshold}"
            )));
        }
        if self.assets.extension.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "asset extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Makes relative `catalog` and `asset_root` paths relative to `base`.
    pub fn rebase(&mut self, base: &Path) {
        if self.catalog.is_relative() {
            self.catalog = base.join(&self.catalog);
        }
        if self.asset_root.is_relative() {
            self.asset_root = base.join(&self.asset_root);
        }
    }
}
