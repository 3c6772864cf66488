pub mod db;

use std::future::Future;
use std::time::{Duration, Instant};

use crate::shared::error::ReportError;

/// Cooperative deadline for a single report data fetch. The pool enforces
/// its own timeouts too; this bound keeps a stuck connection from holding a
/// request open indefinitely.
pub const FETCH_DEADLINE: Duration = Duration::from_secs(20);

/// Run a repository fetch under [`FETCH_DEADLINE`], mapping the two failure
/// modes to their distinct error kinds.
pub async fn fetch_with_deadline<F, T>(fetch: F) -> Result<T, ReportError>
where
    F: Future<Output = anyhow::Result<T>>,
{
    let started = Instant::now();
    match tokio::time::timeout(FETCH_DEADLINE, fetch).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(ReportError::Upstream {
            message: source.to_string(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        }),
        Err(_) => Err(ReportError::Timeout {
            elapsed_ms: started.elapsed().as_millis() as u64,
        }),
    }
}
