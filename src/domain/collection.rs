use crate::domain::model::Record;
use crate::utils::error::{CatalogError, Result};

/// Maximum number of records a collection holds.
pub const CAPACITY: usize = 20;

/// Ordering status of a [`Collection`]. Binary search is only valid in
/// `SortedByName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionStatus {
    #[default]
    Unsorted,
    SortedByName,
}

/// Bounded, ordered sequence of records.
///
/// Insertion order is preserved until a sort reorders it. Only the sort
/// engine may reorder records or change the status.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<Record>,
    status: CollectionStatus,
}

impl Collection {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(CAPACITY),
            status: CollectionStatus::Unsorted,
        }
    }

    /// Appends `record`. A full collection is left untouched.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        if self.records.len() >= CAPACITY {
            return Err(CatalogError::CapacityExceeded { capacity: CAPACITY });
        }
        self.records.push(record);
        self.status = CollectionStatus::Unsorted;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at(&self, index: usize) -> &Record {
        &self.records[index]
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn status(&self) -> CollectionStatus {
        self.status
    }

    pub fn sorted_by_name(&self) -> bool {
        self.status == CollectionStatus::SortedByName
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub(crate) fn set_status(&mut self, status: CollectionStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize) -> Record {
        Record::new(format!("C{:02}", i), "Tipo", 1)
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut collection = Collection::new();
        collection.insert(Record::new("B", "x", 1)).unwrap();
        collection.insert(Record::new("A", "y", 2)).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.at(0).name(), "B");
        assert_eq!(collection.at(1).name(), "A");
    }

    #[test]
    fn test_insert_rejected_at_capacity() {
        let mut collection = Collection::new();
        for i in 0..CAPACITY {
            collection.insert(record(i)).unwrap();
        }

        let err = collection.insert(record(99)).unwrap_err();
        assert!(matches!(err, CatalogError::CapacityExceeded { capacity: 20 }));
        assert_eq!(collection.len(), CAPACITY);
        assert_eq!(collection.at(CAPACITY - 1).name(), "C19");
    }

    #[test]
    fn test_insert_clears_sorted_status() {
        let mut collection = Collection::new();
        collection.set_status(CollectionStatus::SortedByName);
        assert!(collection.sorted_by_name());

        collection.insert(record(0)).unwrap();
        assert_eq!(collection.status(), CollectionStatus::Unsorted);
    }

    #[test]
    fn test_failed_insert_keeps_status() {
        let mut collection = Collection::new();
        for i in 0..CAPACITY {
            collection.insert(record(i)).unwrap();
        }
        collection.set_status(CollectionStatus::SortedByName);

        assert!(collection.insert(record(20)).is_err());
        assert!(collection.sorted_by_name());
    }

    #[test]
    #[should_panic]
    fn test_at_out_of_range_panics() {
        let collection = Collection::new();
        let _ = collection.at(0);
    }
}
