//! "Settle independently" combinator.
//!
//! The orchestrator runs its pipelines concurrently and must never let one
//! failure abort the others: each outcome is resolved on its own, with a
//! per-pipeline default substituted on failure.

/// Resolve a pipeline outcome, substituting `fallback` on failure.
///
/// The failure is logged and swallowed here; callers signal degradation
/// through the fallback value itself (confidence 0, explanatory reason).
pub fn or_default<T>(
    outcome: anyhow::Result<T>,
    pipeline: &str,
    fallback: impl FnOnce() -> T,
) -> T {
    match outcome {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(pipeline, %error, "pipeline failed, substituting default");
            fallback()
        }
    }
}

/// Resolve a pipeline outcome whose failure mode is omission rather than a
/// default value.
pub fn or_omit<T>(outcome: anyhow::Result<T>, pipeline: &str) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(pipeline, %error, "pipeline failed, omitting result");
            None
        }
    }
}
