//! Log-and-continue wrapper shared by every façade operation.

use std::future::Future;

use bridge_traits::{AssetId, LogLevel};

use crate::error::Result;

/// Await `operation` and swallow its error.
///
/// Failures are logged at `level` with the operation name and slot, then
/// turned into `None`. Nothing is retried.
pub(crate) async fn log_and_continue<T, F>(
    operation: &'static str,
    slot: &AssetId,
    level: LogLevel,
    future: F,
) -> Option<T>
where
    F: Future<Output = Result<T>>,
{
    match future.await {
        Ok(value) => Some(value),
        Err(err) => {
            match level {
                LogLevel::Error => {
                    tracing::error!(operation, slot = %slot, error = %err, "Native audio call failed")
                }
                LogLevel::Warn => {
                    tracing::warn!(operation, slot = %slot, error = %err, "Native audio call failed")
                }
                LogLevel::Info => {
                    tracing::info!(operation, slot = %slot, error = %err, "Native audio call failed")
                }
                LogLevel::Debug => {
                    tracing::debug!(operation, slot = %slot, error = %err, "Native audio call failed")
                }
                LogLevel::Trace => {
                    tracing::trace!(operation, slot = %slot, error = %err, "Native audio call failed")
                }
            }
            None
        }
    }
}
