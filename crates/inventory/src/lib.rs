//! Inventory analysis stages.
//!
//! Business rules for the classifier and the slotting recommender, implemented
//! purely as deterministic functions over tables (no IO, no logging, no storage).
//! Every stage returns a new table; nothing is mutated after it leaves a stage.

pub mod abc;
pub mod record;
pub mod slotting;

pub use abc::{classify, ClassificationPolicy, ClassifiedRecord, ClassifierConfig, RankBasis, Thresholds};
pub use record::{InventoryRecord, InventoryTable};
pub use slotting::{assign_slots, slot_label, SlottedRecord};
