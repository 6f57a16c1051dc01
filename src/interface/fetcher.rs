use crate::{RawRepoRecord, StdResult};

/// A trait for fetching raw repository records from the upstream API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the full repository list for the current tick.
    async fn fetch(&self) -> StdResult<Vec<RawRepoRecord>>;
}
