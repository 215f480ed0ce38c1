use crate::core::search::{binary_search_by_name, SearchOutcome};
use crate::core::sort::{SortCriterion, SortReport};
use crate::domain::model::truncate_to_bytes;
use crate::domain::{Collection, CollectionStatus, Record, NAME_MAX_BYTES};
use crate::utils::error::{CatalogError, Result};

/// Fixed sample set appended by [`Catalog::seed_fixed_example`].
pub const EXAMPLE_COMPONENTS: [(&str, &str, i32); 4] = [
    ("Motor", "Propulsao", 2),
    ("Sensor", "Controle", 5),
    ("Chip", "Logica", 1),
    ("Painel", "Estrutura", 3),
];

/// A search answer with the matching record attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchHit {
    Found {
        record: Record,
        index: usize,
        comparisons: u64,
    },
    NotFound {
        comparisons: u64,
    },
}

impl SearchHit {
    pub fn comparisons(&self) -> u64 {
        match self {
            SearchHit::Found { comparisons, .. } | SearchHit::NotFound { comparisons } => {
                *comparisons
            }
        }
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            SearchHit::Found { record, .. } => Some(record),
            SearchHit::NotFound { .. } => None,
        }
    }
}

/// Owner of one collection and the entry point for callers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    collection: Collection,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            collection: Collection::new(),
        }
    }

    pub fn insert(&mut self, name: &str, kind: &str, priority: i32) -> Result<()> {
        self.insert_record(Record::new(name, kind, priority))
    }

    pub fn insert_record(&mut self, record: Record) -> Result<()> {
        match self.collection.insert(record) {
            Ok(()) => {
                let added = self.collection.at(self.collection.len() - 1);
                tracing::debug!(
                    "Inserted '{}' ({}, priority {}), size {}/{}",
                    added.name(),
                    added.kind(),
                    added.priority(),
                    self.collection.len(),
                    self.collection.capacity()
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Insert rejected: {}", e);
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> &[Record] {
        self.collection.records()
    }

    pub fn sort(&mut self, criterion: SortCriterion) -> SortReport {
        criterion.run(&mut self.collection)
    }

    /// Looks up `name`, cut to the same length limit as stored names.
    pub fn search(&self, name: &str) -> Result<SearchHit> {
        let key = truncate_to_bytes(name.to_string(), NAME_MAX_BYTES);
        let hit = match binary_search_by_name(&self.collection, &key)? {
            SearchOutcome::Found { index, comparisons } => SearchHit::Found {
                record: self.collection.at(index).clone(),
                index,
                comparisons,
            },
            SearchOutcome::NotFound { comparisons } => SearchHit::NotFound { comparisons },
        };
        Ok(hit)
    }

    /// Appends the fixed sample set until it runs out or the collection is
    /// full. Returns how many records were added.
    pub fn seed_fixed_example(&mut self) -> usize {
        let mut added = 0;
        for (name, kind, priority) in EXAMPLE_COMPONENTS {
            match self.insert(name, kind, priority) {
                Ok(()) => added += 1,
                Err(CatalogError::CapacityExceeded { .. }) => break,
                Err(e) => {
                    tracing::error!("Unexpected error while seeding: {}", e);
                    break;
                }
            }
        }
        tracing::info!("Seeded {} example components", added);
        added
    }

    pub fn status(&self) -> CollectionStatus {
        self.collection.status()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.collection.capacity()
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }
}
