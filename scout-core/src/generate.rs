use crate::Result;
use async_trait::async_trait;

/// Plain text-in, text-out generation capability.
///
/// Concrete providers live in `scout-model`. The recommendation engine only
/// depends on this trait, so analysis and justification can run against any
/// backend, and against none at all when callers pick the heuristic
/// strategies instead.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name, used in logs.
    fn name(&self) -> &str;

    /// Generate a completion for `prompt`.
    ///
    /// Failures here are expected operational events (network, auth, quota,
    /// timeout). Callers in the engine treat any error as a signal to fall
    /// back to deterministic output, never as fatal.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
