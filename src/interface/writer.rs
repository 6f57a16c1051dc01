use crate::StdResult;

/// A trait for writing one tick's batch of records to a storage medium.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BatchWriter<R: Send + Sync + 'static>: Sync + Send {
    /// Persists the batch, returning the number of records written.
    async fn write_batch(&self, records: &[R]) -> StdResult<u32>;
}
