use crate::StdResult;

/// A trait for authorizing privileged job execution.
///
/// Checked once at tick entry; a denial aborts the tick before any fetch or
/// write happens.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TickAuthorizer: Sync + Send {
    /// Checks that the job template may run a harvest tick.
    async fn authorize(&self, template_id: &str) -> StdResult<()>;
}
