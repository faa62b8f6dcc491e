use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use super::{AssetError, AssetSize, Result, SOURCE_EXTENSIONS};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VariantReport {
    pub size: AssetSize,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageReport {
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
    pub variants: Vec<VariantReport>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct OptimizeReport {
    pub images: Vec<ImageReport>,
    pub duration_ms: u128,
}

/// Every image under `input`, in path order.
pub fn collect_sources(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Err(AssetError::MissingInput(input.to_path_buf()));
    }
    let mut sources = Vec::new();
    for entry in WalkDir::new(input).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_image = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SOURCE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if is_image {
            sources.push(entry.into_path());
        }
    }
    sources.sort();
    Ok(sources)
}

/// Renders each source under `input` into `output/{size}/{relative dir}/{stem}.webp`,
/// shrinking to the size's width and never enlarging.
pub fn optimize_tree(input: &Path, output: &Path, sizes: &[AssetSize]) -> Result<OptimizeReport> {
    let started = Instant::now();
    let sources = collect_sources(input)?;
    log::info!(
        "optimizing {} images from {} into {}",
        sources.len(),
        input.display(),
        output.display()
    );

    let images = sources
        .par_iter()
        .map(|source| optimize_image(input, output, source, sizes))
        .collect::<Result<Vec<_>>>()?;

    Ok(OptimizeReport {
        images,
        duration_ms: started.elapsed().as_millis(),
    })
}

fn optimize_image(
    input: &Path,
    output: &Path,
    source: &Path,
    sizes: &[AssetSize],
) -> Result<ImageReport> {
    let image_error = |source_error| AssetError::Image {
        path: source.to_path_buf(),
        source: source_error,
    };
    let image = image::open(source).map_err(image_error)?;
    let (width, height) = image.dimensions();
    let relative_dir = source
        .parent()
        .and_then(|parent| parent.strip_prefix(input).ok())
        .unwrap_or_else(|| Path::new(""));
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut variants = Vec::with_capacity(sizes.len());
    for size in sizes {
        let target_dir = output.join(size.name()).join(relative_dir);
        fs::create_dir_all(&target_dir)?;
        let path = target_dir.join(format!("{stem}.webp"));

        let resized = if width > size.width() {
            image.resize(size.width(), u32::MAX, FilterType::Lanczos3)
        } else {
            image.clone()
        };
        let encoded = DynamicImage::ImageRgba8(resized.to_rgba8());
        encoded
            .save_with_format(&path, ImageFormat::WebP)
            .map_err(image_error)?;
        log::debug!(
            "{} -> {} ({}x{})",
            source.display(),
            path.display(),
            encoded.width(),
            encoded.height()
        );

        variants.push(VariantReport {
            size: *size,
            path,
            width: encoded.width(),
            height: encoded.height(),
        });
    }

    Ok(ImageReport {
        source: source.to_path_buf(),
        width,
        height,
        variants,
    })
}
