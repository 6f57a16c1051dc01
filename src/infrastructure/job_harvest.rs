use std::sync::Arc;

use chrono::Utc;
use log::info;
use tokio::sync::{Mutex, RwLock};

use crate::{
    BatchWriter, HarvestRunner, JobState, RecordTransformer, RepositoryFetcher, StdResult,
    TickAuthorizer, TickReport,
};

/// A harvest job orchestrating one fetch-transform-write pipeline.
///
/// The fetcher, transformer, and writer are injected at construction rather
/// than overridden by subclassing, so one job implementation serves both the
/// relational and the document pipelines. A tick lock serializes overlapping
/// invocations: two ticks can never interleave their batches into one store
/// write.
pub struct HarvestJob<R: Send + Sync + 'static> {
    template_id: String,
    authorizer: Arc<dyn TickAuthorizer>,
    fetcher: Arc<dyn RepositoryFetcher>,
    transformer: Arc<dyn RecordTransformer<R>>,
    writer: Arc<dyn BatchWriter<R>>,
    tick_lock: Mutex<()>,
    state: RwLock<JobState>,
}

impl<R: Send + Sync + 'static> HarvestJob<R> {
    /// Creates a new `HarvestJob` instance with the given collaborators.
    pub fn new(
        template_id: &str,
        authorizer: Arc<dyn TickAuthorizer>,
        fetcher: Arc<dyn RepositoryFetcher>,
        transformer: Arc<dyn RecordTransformer<R>>,
        writer: Arc<dyn BatchWriter<R>>,
    ) -> Self {
        Self {
            template_id: template_id.to_string(),
            authorizer,
            fetcher,
            transformer,
            writer,
            tick_lock: Mutex::new(()),
            state: RwLock::new(JobState::Idle),
        }
    }

    /// Retrieves the current lifecycle state of the job.
    pub async fn state(&self) -> JobState {
        *self.state.read().await
    }

    async fn set_state(&self, state: JobState) {
        let mut current_state = self.state.write().await;
        *current_state = state;
    }

    async fn execute_tick(&self) -> StdResult<TickReport> {
        self.authorizer.authorize(&self.template_id).await?;
        let raw_records = self.fetcher.fetch().await?;
        let harvested_at = Utc::now();
        let mut records = Vec::new();
        for raw in &raw_records {
            records.extend(self.transformer.transform(raw, harvested_at));
        }
        let total_written = if records.is_empty() {
            0
        } else {
            self.writer.write_batch(&records).await?
        };
        info!(
            "Collected {} repository records for job {}",
            raw_records.len(),
            self.template_id
        );

        Ok(TickReport::new(raw_records.len() as u32, total_written))
    }
}

#[async_trait::async_trait]
impl<R: Send + Sync + 'static> HarvestRunner for HarvestJob<R> {
    fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Runs one harvest tick.
    ///
    /// Any failure aborts the tick and propagates to the scheduler; the next
    /// scheduled tick is the only recovery mechanism. The job returns to
    /// `Idle` on every exit path.
    async fn run_tick(&self) -> StdResult<TickReport> {
        let _tick_guard = self.tick_lock.lock().await;
        self.set_state(JobState::Running).await;
        let result = self.execute_tick().await;
        self.set_state(JobState::Idle).await;

        result
    }
}
