use crate::{StdResult, TickReport};

/// An object-safe entry point for executing one scheduled harvest tick.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HarvestRunner: Sync + Send {
    /// The unique name of the job.
    fn template_id(&self) -> &str;

    /// Runs one harvest tick.
    async fn run_tick(&self) -> StdResult<TickReport>;
}
