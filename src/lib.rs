pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{DisplayFormat, MenuSession};
pub use config::CatalogConfig;
pub use core::{Catalog, SearchHit, SortCriterion, SortReport};
pub use domain::{Collection, CollectionStatus, Record, CAPACITY};
pub use utils::error::{CatalogError, Result};
