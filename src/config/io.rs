use std::fs;
use std::path::Path;

use super::{Result, SiteConfig};

/// Reads a `.yaml`/`.yml` or JSON site configuration. Relative paths inside
/// it are taken relative to the file's directory.
pub fn load_config(path: impl AsRef<Path>) -> Result<SiteConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let mut config = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<SiteConfig>(&raw)?
    } else {
        serde_json::from_str::<SiteConfig>(&raw)?
    };
    if let Some(parent) = path.parent() {
        config.rebase(parent);
    }
    config.validate()?;
    log::debug!("loaded site configuration from {}", path.display());
    Ok(config)
}
