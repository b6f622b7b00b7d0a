//! `smartspace-ai`
//!
//! **Responsibility:** Optional language-model boundary.
//!
//! This crate is intentionally **not** part of the analysis core:
//! - It only reads finished KPI sets; it never touches the record tables.
//! - Generator failures are recovered into a degraded `Summary`, never propagated.
//! - The external service sits behind `TextGenerator` so tests can use stubs.

pub mod generator;
pub mod recommendation;
pub mod result;
pub mod summary;

pub use generator::{FailingGenerator, StaticGenerator, TextGenerator};
pub use recommendation::{generate_recommendations, Recommendation};
pub use result::{GenerationError, Summary};
pub use summary::{build_prompt, summarize};
