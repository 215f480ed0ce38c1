//! Instrumented in-place sorts over a [`Collection`].
//!
//! Three quadratic algorithms, one per sort key:
//! - name: bubble sort, stable, always `n(n-1)/2` comparisons
//! - type: insertion sort, stable, data-dependent comparison count
//! - priority: selection sort, not stable, always `n(n-1)/2` comparisons
//!
//! Every run goes through [`measure_comparisons`] so all three report the same
//! [`SortReport`].

use crate::domain::{Collection, CollectionStatus, Record};
use crate::utils::error::CatalogError;
use crate::utils::monitor::{measure_comparisons, Measurement};
use crate::utils::validation::parse_leading_int;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Key to sort by. Each variant is bound to one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    ByName,
    ByType,
    ByPriority,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::ByName,
        SortCriterion::ByType,
        SortCriterion::ByPriority,
    ];

    pub fn algorithm_name(&self) -> &'static str {
        match self {
            SortCriterion::ByName => "bubble",
            SortCriterion::ByType => "insertion",
            SortCriterion::ByPriority => "selection",
        }
    }

    /// Status the collection is left in after this sort.
    pub fn resulting_status(&self) -> CollectionStatus {
        match self {
            SortCriterion::ByName => CollectionStatus::SortedByName,
            SortCriterion::ByType | SortCriterion::ByPriority => CollectionStatus::Unsorted,
        }
    }

    /// Sorts `collection` in place and reports the cost.
    pub fn run(self, collection: &mut Collection) -> SortReport {
        let records = collection.records_mut();
        let measurement = measure_comparisons(self.algorithm_name(), || match self {
            SortCriterion::ByName => bubble_sort_by_name(records),
            SortCriterion::ByType => insertion_sort_by_type(records),
            SortCriterion::ByPriority => selection_sort_by_priority(records),
        });
        collection.set_status(self.resulting_status());

        tracing::info!(
            "Sorted {} records by {} ({} sort): {} comparisons in {:?}",
            collection.len(),
            self,
            self.algorithm_name(),
            measurement.comparisons,
            measurement.elapsed
        );

        SortReport {
            criterion: self,
            measurement,
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortCriterion::ByName => "name",
            SortCriterion::ByType => "type",
            SortCriterion::ByPriority => "priority",
        };
        f.write_str(label)
    }
}

impl FromStr for SortCriterion {
    type Err = CatalogError;

    /// Accepts the key name or the menu number (`1`, `2`, `3`, read with
    /// `atoi` rules).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "nome" => Ok(SortCriterion::ByName),
            "type" | "tipo" => Ok(SortCriterion::ByType),
            "priority" | "prioridade" => Ok(SortCriterion::ByPriority),
            other => match parse_leading_int(other) {
                1 => Ok(SortCriterion::ByName),
                2 => Ok(SortCriterion::ByType),
                3 => Ok(SortCriterion::ByPriority),
                _ => Err(CatalogError::InvalidInput {
                    field: "criterion".to_string(),
                    value: other.to_string(),
                    reason: "expected 1 (name), 2 (type) or 3 (priority)".to_string(),
                }),
            },
        }
    }
}

/// Outcome of one sort: which key, how many comparisons, how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    pub criterion: SortCriterion,
    pub measurement: Measurement,
}

impl SortReport {
    pub fn comparisons(&self) -> u64 {
        self.measurement.comparisons
    }

    pub fn elapsed(&self) -> Duration {
        self.measurement.elapsed
    }
}

/// Bubble sort by name. Runs the full triangular pass schedule and swaps only
/// on a strictly greater left name.
pub fn bubble_sort_by_name(records: &mut [Record]) -> u64 {
    let n = records.len();
    let mut comparisons = 0;
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            comparisons += 1;
            if records[j].name() > records[j + 1].name() {
                records.swap(j, j + 1);
            }
        }
    }
    comparisons
}

/// Insertion sort by type. Each evaluated type test counts, including the
/// one that stops the shift.
pub fn insertion_sort_by_type(records: &mut [Record]) -> u64 {
    let mut comparisons = 0;
    for i in 1..records.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if records[j - 1].kind() > records[j].kind() {
                records.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }
    comparisons
}

/// Selection sort by priority. Keeps the earliest minimum on ties; the final
/// swap can move an equal-priority record past another, so it is not stable.
pub fn selection_sort_by_priority(records: &mut [Record]) -> u64 {
    let n = records.len();
    let mut comparisons = 0;
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            comparisons += 1;
            if records[j].priority() < records[min].priority() {
                min = j;
            }
        }
        records.swap(i, min);
    }
    comparisons
}
