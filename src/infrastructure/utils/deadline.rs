use std::{future::Future, time::Duration};

use tokio::time::timeout;

use crate::errors::AppError;

/// Runs `operation` to completion or fails with a storage error once `limit` elapses.
///
/// Nesting calls composes deadlines: whichever expires first wins.
pub async fn with_deadline<F, T>(limit: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    timeout(limit, operation)
        .await
        .map_err(|_| AppError::StorageError(format!(
            "operation cancelled after {}",
            humantime::format_duration(limit)
        )))?
}
