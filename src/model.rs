mod catalog;
mod error;
mod io;
mod record;


pub use catalog::{Catalog, DEFAULT_CATEGORIES};
pub use error::{CatalogError, Result};
pub use io::{load_catalog, load_records};
pub use record::ImageRecord;
