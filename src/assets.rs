mod error;
mod layout;
mod optimize;
mod size;


pub use error::{AssetError, Result};
pub use layout::{AssetLayout, SOURCE_EXTENSIONS};
pub use optimize::{ImageReport, OptimizeReport, VariantReport, collect_sources, optimize_tree};
pub use size::AssetSize;
