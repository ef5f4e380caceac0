//! Summary retrieval policy: cache-or-generate.
//!
//! A cached summary is returned as-is (no staleness check). Only a not-found answer
//! from the cache lookup falls through to generation; any other failure is returned
//! to the caller and the generator is left alone. Refresh skips the cache entirely
//! and relies on the server to overwrite the cached entry.

use crate::error::ApiError;
use crate::model::{FormId, Summary, SummaryOrigin, SummaryOutcome};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Where summaries are read from and generated.
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Previously generated summary. `ApiError::NotFound` when none is cached.
    async fn cached_summary(&self, form_id: FormId) -> Result<Summary, ApiError>;

    /// Generate a fresh summary. The server caches the result as a side effect.
    async fn generate_summary(&self, form_id: FormId) -> Result<Summary, ApiError>;
}

/// Cached summary for `form_id`, generating one on a cache miss.
pub async fn obtain_summary<S: SummarySource + ?Sized>(
    source: &S,
    form_id: FormId,
) -> Result<SummaryOutcome, ApiError> {
    debug!(form_id, "Looking up cached summary");
    match source.cached_summary(form_id).await {
        Ok(summary) => {
            info!(form_id, "Summary cache hit");
            Ok(SummaryOutcome {
                summary,
                origin: SummaryOrigin::Cached,
            })
        }
        Err(e) if e.is_not_found() => {
            info!(form_id, "Summary cache miss; generating");
            generate(source, form_id).await
        }
        Err(e) => {
            warn!(form_id, error = %e, "Summary cache lookup failed");
            Err(e)
        }
    }
}

/// Always regenerate, bypassing the cache.
pub async fn refresh_summary<S: SummarySource + ?Sized>(
    source: &S,
    form_id: FormId,
) -> Result<SummaryOutcome, ApiError> {
    info!(form_id, "Forcing summary regeneration");
    generate(source, form_id).await
}

async fn generate<S: SummarySource + ?Sized>(
    source: &S,
    form_id: FormId,
) -> Result<SummaryOutcome, ApiError> {
    let summary = source.generate_summary(form_id).await.map_err(|e| {
        warn!(form_id, error = %e, "Summary generation failed");
        e
    })?;
    info!(form_id, length = summary.summary.len(), "Summary generated");
    Ok(SummaryOutcome {
        summary,
        origin: SummaryOrigin::Generated,
    })
}
