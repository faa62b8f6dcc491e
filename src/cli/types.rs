use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::model::ImageRecord;

#[derive(Debug, Parser)]
#[command(
    name = "gallery",
    version,
    about = "Portfolio gallery browser and asset tools"
)]
pub(super) struct Cli {
    /// Site configuration (.yaml, .yml or .json). Defaults to ./site.yaml when present.
    #[arg(long, global = true)]
    pub(super) config: Option<PathBuf>,
    /// Catalog file overriding the one named in the configuration.
    #[arg(long, global = true)]
    pub(super) catalog: Option<PathBuf>,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Resolves an address into the page it shows.
    Resolve {
        address: String,
    },
    Categories,
    /// Prints the optimized asset paths for a catalog src.
    Asset {
        src: String,
        #[arg(long)]
        size: Option<String>,
    },
    /// Draws a hero pool the way the home page does.
    Hero {
        #[arg(long)]
        pick: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    Optimize {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long = "size")]
        sizes: Vec<String>,
    },
    /// Opens the native window, optionally at an address.
    View {
        address: Option<String>,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct SubcategoryInfo {
    pub(super) subcategory: String,
    pub(super) title: String,
    pub(super) href: String,
    pub(super) works: String,
}

#[derive(Debug, Serialize)]
pub(super) struct CategoryInfo {
    pub(super) category: String,
    pub(super) label: String,
    pub(super) href: String,
    pub(super) subcategories: Vec<SubcategoryInfo>,
}

#[derive(Debug, Serialize)]
pub(super) struct AssetInfo {
    pub(super) size: String,
    pub(super) width: u32,
    pub(super) url: String,
    pub(super) path: String,
}

#[derive(Debug, Serialize)]
pub(super) struct HeroInfo {
    pub(super) seed: u64,
    pub(super) interval_ms: u64,
    pub(super) controls: bool,
    pub(super) records: Vec<ImageRecord>,
}
