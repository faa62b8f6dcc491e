use std::fs;
use std::path::Path;

use super::{Catalog, ImageRecord, Result};

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ImageRecord>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let records = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<Vec<ImageRecord>>(&raw)?
    } else {
        serde_json::from_str::<Vec<ImageRecord>>(&raw)?
    };
    Ok(records)
}

pub fn load_catalog<S: AsRef<str>>(path: impl AsRef<Path>, categories: &[S]) -> Result<Catalog> {
    let path = path.as_ref();
    let records = load_records(path)?;
    let catalog = Catalog::new(records, categories.iter().map(|c| c.as_ref().to_string()));
    for record in catalog.duplicate_sources() {
        log::warn!(
            "duplicate src `{}` in {}/{}; the first occurrence wins",
            record.src,
            record.category,
            record.subcategory
        );
    }
    log::info!(
        "loaded {} catalog records from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}
