use std::path::{Path, PathBuf};

use crate::assets::{AssetLayout, AssetSize, OptimizeReport, optimize_tree};

use super::Result;

#[derive(Debug, Clone)]
pub struct AssetService {
    layout: AssetLayout,
    root: PathBuf,
}

impl AssetService {
    pub fn new(layout: AssetLayout, root: PathBuf) -> Self {
        Self { layout, root }
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    pub fn url(&self, src: &str, size: AssetSize) -> String {
        self.layout.resolve(src, size)
    }

    pub fn local_path(&self, src: &str, size: AssetSize) -> PathBuf {
        self.layout.local_path(&self.root, src, size)
    }

    pub fn optimize(
        &self,
        input: &Path,
        output: Option<&Path>,
        sizes: &[AssetSize],
    ) -> Result<OptimizeReport> {
        let default_output = self.root.join(self.layout.base.trim_start_matches('/'));
        let output = output.unwrap_or(&default_output);
        Ok(optimize_tree(input, output, sizes)?)
    }
}
