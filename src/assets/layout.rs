use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AssetSize;

/// Source extensions the transform strips, matched case-insensitively.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Maps a catalog `src` onto the optimized variant of a given size:
/// `/gallery/photos/a/Front.JPG` → `/images/optimized/large/photos/a/Front.webp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetLayout {
    pub source_prefix: String,
    pub base: String,
    pub extension: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            source_prefix: "/gallery/".to_string(),
            base: "/images/optimized".to_string(),
            extension: "webp".to_string(),
        }
    }
}

impl AssetLayout {
    /// `src` without the source prefix and without a known image extension.
    pub fn stem<'a>(&self, src: &'a str) -> &'a str {
        let relative = src.strip_prefix(self.source_prefix.as_str()).unwrap_or(src);
        strip_image_extension(relative)
    }

    pub fn resolve(&self, src: &str, size: AssetSize) -> String {
        format!(
            "{}/{}/{}.{}",
            self.base.trim_end_matches('/'),
            size.name(),
            self.stem(src).trim_start_matches('/'),
            self.extension
        )
    }

    /// Where the resolved asset lives under a served directory on disk.
    pub fn local_path(&self, root: &Path, src: &str, size: AssetSize) -> PathBuf {
        let resolved = self.resolve(src, size);
        root.join(resolved.trim_start_matches('/'))
    }
}

fn strip_image_extension(path: &str) -> &str {
    match path.rsplit_once('.') {
        Some((stem, extension))
            if SOURCE_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known)) =>
        {
            stem
        }
        _ => path,
    }
}
