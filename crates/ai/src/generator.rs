use crate::result::GenerationError;

/// Minimal capability interface for an external text-generation service.
///
/// `generate` is a blocking request/response call. Implementations are expected
/// to bound it with their own timeout; callers treat any error as non-fatal.
pub trait TextGenerator: Send + Sync {
    /// Short name used in logs and in the generated `Summary`.
    fn name(&self) -> &str;

    /// Turn a prompt into a block of prose.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Deterministic generator that always answers with the same text.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    text: String,
}

impl StaticGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextGenerator for StaticGenerator {
    fn name(&self) -> &str {
        "static"
    }

    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.text.clone())
    }
}

/// Generator that always fails with the configured error (service outage stand-in).
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    error: GenerationError,
}

impl FailingGenerator {
    pub fn new(error: GenerationError) -> Self {
        Self { error }
    }
}

impl TextGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(self.error.clone())
    }
}
