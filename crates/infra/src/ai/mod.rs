//! Language-model adapters (optional subsystem).
//!
//! Failures here are isolated: the pipeline downgrades them into an
//! unavailable summary and keeps its analytical output.

#[cfg(feature = "http")]
pub mod chat_completions;

#[cfg(feature = "http")]
pub use chat_completions::ChatCompletionsGenerator;
