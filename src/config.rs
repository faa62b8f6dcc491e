mod error;
mod io;
mod site;


pub use error::{ConfigError, Result};
pub use io::load_config;
pub use site::SiteConfig;
