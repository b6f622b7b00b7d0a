//! Slotting recommender.
//!
//! Orders classified records by (category, rank value desc) and hands out
//! per-category slot labels `A01, A02, ..., B01, ...` in a single pass.

use serde::{Deserialize, Serialize};

use smartspace_core::{Category, LocationId};

use crate::abc::ClassifiedRecord;

/// A classified record with its recommended storage slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlottedRecord {
    #[serde(flatten)]
    pub classified: ClassifiedRecord,
    pub new_location: LocationId,
}

impl SlottedRecord {
    pub fn category(&self) -> Category {
        self.classified.category
    }

    pub fn current_stock(&self) -> f64 {
        self.classified.record.current_stock
    }

    pub fn daily_demand(&self) -> f64 {
        self.classified.record.daily_demand
    }

    /// Whether the recommendation moves the item away from its current slot.
    pub fn is_relocated(&self) -> bool {
        self.classified.record.current_location != self.new_location
    }
}

/// Next free slot number per category, 1-based.
#[derive(Debug, Clone, Copy)]
struct SlotCounters([u32; 3]);

impl SlotCounters {
    fn new() -> Self {
        Self([1; 3])
    }

    fn next(&mut self, category: Category) -> u32 {
        let counter = &mut self.0[category.index()];
        let n = *counter;
        *counter += 1;
        n
    }
}

/// Slot label for the `n`-th slot of a category, e.g. `A01`.
pub fn slot_label(category: Category, n: u32) -> LocationId {
    LocationId::new(format!("{category}{n:02}"))
}

/// Assign new locations to classified records.
///
/// An empty input yields an empty output.
pub fn assign_slots(mut records: Vec<ClassifiedRecord>) -> Vec<SlottedRecord> {
    records.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| b.rank_value.total_cmp(&a.rank_value))
    });

    let mut counters = SlotCounters::new();
    records
        .into_iter()
        .map(|classified| {
            let n = counters.next(classified.category);
            SlottedRecord {
                new_location: slot_label(classified.category, n),
                classified,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abc::{classify, ClassifierConfig};
    use crate::record::{InventoryRecord, InventoryTable};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn classified(id: &str, rank_value: f64, category: Category) -> ClassifiedRecord {
        ClassifiedRecord {
            record: InventoryRecord::new(id, 1.0, rank_value, "LOC_01"),
            rank_value,
            cumulative_fraction: 0.0,
            category,
        }
    }

    fn labels(rows: &[SlottedRecord]) -> Vec<&str> {
        rows.iter().map(|r| r.new_location.as_str()).collect()
    }

    #[test]
    fn empty_input_is_a_no_op() {
        assert!(assign_slots(Vec::new()).is_empty());
    }

    #[test]
    fn groups_by_category_then_rank() {
        let rows = assign_slots(vec![
            classified("c1", 1.0, Category::C),
            classified("b1", 5.0, Category::B),
            classified("a1", 9.0, Category::A),
            classified("b2", 7.0, Category::B),
            classified("a2", 12.0, Category::A),
        ]);

        let ids: Vec<&str> = rows.iter().map(|r| r.classified.record.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a1", "b2", "b1", "c1"]);
        assert_eq!(labels(&rows), vec!["A01", "A02", "B01", "B02", "C01"]);
        assert!(rows.iter().all(SlottedRecord::is_relocated));
    }

    #[test]
    fn equal_rank_values_keep_incoming_order() {
        let rows = assign_slots(vec![
            classified("first", 3.0, Category::B),
            classified("second", 3.0, Category::B),
        ]);
        assert_eq!(rows[0].classified.record.id.as_str(), "first");
        assert_eq!(labels(&rows), vec!["B01", "B02"]);
    }

    #[test]
    fn labels_widen_past_two_digits() {
        assert_eq!(slot_label(Category::C, 7).as_str(), "C07");
        assert_eq!(slot_label(Category::A, 123).as_str(), "A123");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: slot labels are unique and each category's suffixes are exactly 1..=N.
        #[test]
        fn slots_are_unique_and_contiguous(
            demands in prop::collection::vec(1u32..1_000u32, 1..150),
        ) {
            let table = InventoryTable::new(
                demands
                    .iter()
                    .enumerate()
                    .map(|(i, d)| InventoryRecord::new(format!("P{i}"), 1.0, f64::from(*d), "LOC_01"))
                    .collect(),
            )
            .unwrap();
            let rows = assign_slots(classify(&table, &ClassifierConfig::default()).unwrap());
            prop_assert_eq!(rows.len(), demands.len());

            let unique: HashSet<&str> = rows.iter().map(|r| r.new_location.as_str()).collect();
            prop_assert_eq!(unique.len(), rows.len());

            for category in Category::ALL {
                let suffixes: Vec<u32> = rows
                    .iter()
                    .filter(|r| r.category() == category)
                    .map(|r| r.new_location.as_str()[1..].parse::<u32>().unwrap())
                    .collect();
                let expected: Vec<u32> = (1..=suffixes.len() as u32).collect();
                prop_assert_eq!(suffixes, expected);
            }

            for pair in rows.windows(2) {
                prop_assert!(pair[0].category() <= pair[1].category());
                if pair[0].category() == pair[1].category() {
                    prop_assert!(pair[0].classified.rank_value >= pair[1].classified.rank_value);
                }
            }
        }
    }
}
