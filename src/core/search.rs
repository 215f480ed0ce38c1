use crate::domain::Collection;
use crate::utils::error::{CatalogError, Result};
use std::cmp::Ordering;

/// Result of a completed binary search. A miss is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { index: usize, comparisons: u64 },
    NotFound { comparisons: u64 },
}

impl SearchOutcome {
    pub fn comparisons(&self) -> u64 {
        match self {
            SearchOutcome::Found { comparisons, .. } | SearchOutcome::NotFound { comparisons } => {
                *comparisons
            }
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found { index, .. } => Some(*index),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}

/// Binary search for `key` over the names of a name-sorted collection.
///
/// Fails with [`CatalogError::PreconditionViolation`] without reading any
/// record when the collection is not sorted by name. Each midpoint costs one
/// three-way comparison.
pub fn binary_search_by_name(collection: &Collection, key: &str) -> Result<SearchOutcome> {
    if !collection.sorted_by_name() {
        tracing::warn!("Search for '{}' refused: collection is not sorted by name", key);
        return Err(CatalogError::PreconditionViolation);
    }

    let mut low = 0;
    let mut high = collection.len();
    let mut comparisons = 0;

    while low < high {
        let mid = low + (high - low) / 2;
        comparisons += 1;
        match collection.at(mid).name().cmp(key) {
            Ordering::Equal => {
                tracing::debug!("Found '{}' at {} after {} comparisons", key, mid, comparisons);
                return Ok(SearchOutcome::Found {
                    index: mid,
                    comparisons,
                });
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    tracing::debug!("'{}' not found after {} comparisons", key, comparisons);
    Ok(SearchOutcome::NotFound { comparisons })
}
