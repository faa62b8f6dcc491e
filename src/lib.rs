pub mod assets;
pub mod cli;
pub mod config;
pub mod gallery;
pub mod hero;
pub mod model;
pub mod runtime;
pub mod ui;
pub mod viewer;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}

/// Opens the window at the home page using `./site.yaml` when present.
pub fn run_ui() -> Result<(), String> {
    let context = runtime::AppContext::open(None, None).map_err(|error| error.to_string())?;
    ui::run(context, None)
}
