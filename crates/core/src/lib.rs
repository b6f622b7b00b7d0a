//! `smartspace-core`: shared building blocks for the analysis pipeline.
//!
//! This crate contains **pure** primitives (no IO, no logging setup): the error
//! model, strongly-typed identifiers and the ABC category.

pub mod category;
pub mod entity;
pub mod error;
pub mod id;

pub use category::Category;
pub use entity::{ensure_unique_ids, Entity};
pub use error::{checked_ratio, AnalysisError, AnalysisResult};
pub use id::{LocationId, SkuId};
