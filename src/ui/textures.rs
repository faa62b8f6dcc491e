use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;

use crate::assets::AssetSize;
use crate::runtime::AssetService;

/// Lazily decoded textures keyed by `(src, size)`. A failed load is cached as
/// `None` so it is reported once.
#[derive(Default)]
pub(super) struct TextureCache {
    handles: HashMap<(String, AssetSize), Option<egui::TextureHandle>>,
}

impl TextureCache {
    pub(super) fn get(
        &mut self,
        ctx: &egui::Context,
        assets: &AssetService,
        asset_root: &Path,
        src: &str,
        size: AssetSize,
    ) -> Option<egui::TextureHandle> {
        self.handles
            .entry((src.to_string(), size))
            .or_insert_with(|| {
                let candidates = [
                    assets.local_path(src, size),
                    asset_root.join(src.trim_start_matches('/')),
                ];
                match load_color_image(&candidates) {
                    Ok(image) => Some(ctx.load_texture(
                        format!("{src}@{size}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    )),
                    Err(error) => {
                        log::warn!("cannot show {src}: {error}");
                        None
                    }
                }
            })
            .clone()
    }
}

/// Decodes the first candidate that exists; optimized variants come first,
/// the original file is the fallback.
fn load_color_image(candidates: &[PathBuf]) -> Result<egui::ColorImage, String> {
    let path = candidates
        .iter()
        .find(|path| path.is_file())
        .ok_or_else(|| "neither the optimized variant nor the original exists".to_string())?;
    let image = image::open(path)
        .map_err(|error| format!("{}: {error}", path.display()))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        image.as_raw(),
    ))
}
