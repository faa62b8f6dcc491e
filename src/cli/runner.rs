use clap::Parser;

use crate::assets::AssetSize;
use crate::gallery::{GallerySlice, Route, category_label, subcategory_title, works_label};
use crate::hero::HeroPool;
use crate::runtime::AppContext;

use super::types::{AssetInfo, CategoryInfo, Cli, Commands, HeroInfo, SubcategoryInfo};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::open(cli.config.as_deref(), cli.catalog)
        .map_err(|error| error.to_string())?;

    match cli.command {
        Commands::Resolve { address } => {
            let view = app.resolve(&address).map_err(|error| error.to_string())?;
            print_json(&view)?;
        }
        Commands::Categories => {
            let catalog = app.catalog();
            let mut categories = Vec::new();
            for category in catalog.categories() {
                let mut subcategories = Vec::new();
                for subcategory in catalog.subcategories(category) {
                    let slice = GallerySlice::build(catalog, category, subcategory)
                        .map_err(|error| error.to_string())?;
                    subcategories.push(SubcategoryInfo {
                        subcategory: subcategory.to_string(),
                        title: subcategory_title(subcategory),
                        href: Route::Subcategory {
                            category: category.clone(),
                            subcategory: subcategory.to_string(),
                        }
                        .address(),
                        works: works_label(slice.len()),
                    });
                }
                categories.push(CategoryInfo {
                    category: category.clone(),
                    label: category_label(category),
                    href: Route::Category {
                        category: category.clone(),
                    }
                    .address(),
                    subcategories,
                });
            }
            print_json(&categories)?;
        }
        Commands::Asset { src, size } => {
            let sizes = parse_sizes(size.as_slice())?;
            let assets = sizes
                .into_iter()
                .map(|size| AssetInfo {
                    size: size.to_string(),
                    width: size.width(),
                    url: app.asset_service().url(&src, size),
                    path: app
                        .asset_service()
                        .local_path(&src, size)
                        .display()
                        .to_string(),
                })
                .collect::<Vec<_>>();
            print_json(&assets)?;
        }
        Commands::Hero { pick, seed } => {
            let mut config = app.hero_service().config().clone();
            if let Some(pick) = pick {
                config.pick = pick;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            let pool = HeroPool::sample(app.catalog(), &config);
            print_json(&HeroInfo {
                seed: pool.seed(),
                interval_ms: config.interval_ms,
                controls: !pool.is_degenerate(),
                records: pool.records().to_vec(),
            })?;
        }
        Commands::Optimize {
            input,
            output,
            sizes,
        } => {
            let sizes = parse_sizes(&sizes)?;
            let report = app
                .asset_service()
                .optimize(&input, output.as_deref(), &sizes)
                .map_err(|error| error.to_string())?;
            print_json(&report)?;
        }
        Commands::View { address } => {
            crate::ui::run(app, address)?;
        }
    }

    Ok(())
}

/// No names means every size.
fn parse_sizes(names: &[String]) -> Result<Vec<AssetSize>, String> {
    if names.is_empty() {
        return Ok(AssetSize::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| name.parse::<AssetSize>().map_err(|error| error.to_string()))
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}
