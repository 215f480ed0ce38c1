pub mod catalog;
pub mod search;
pub mod sort;

pub use crate::domain::{Collection, CollectionStatus, Record};
pub use crate::utils::error::Result;
pub use catalog::{Catalog, SearchHit, EXAMPLE_COMPONENTS};
pub use search::{binary_search_by_name, SearchOutcome};
pub use sort::{SortCriterion, SortReport};
