use std::sync::Arc;

use anyhow::anyhow;
use log::{info, warn};
use tokio::time::{MissedTickBehavior, interval};

use crate::{JobRegistry, JobTemplate, StdResult};

/// A scheduler driving registered harvest jobs on a fixed period.
///
/// One task is spawned per registered job template; the first tick fires
/// immediately, subsequent ticks follow the template period. A failed tick is
/// logged and the loop continues: the next tick performs a full resync, so
/// transient failures self-heal within one period.
pub struct PeriodicScheduler {
    registry: Arc<JobRegistry>,
}

impl PeriodicScheduler {
    /// Creates a new `PeriodicScheduler` instance over the given registry.
    pub fn new(registry: Arc<JobRegistry>) -> Self {
        Self { registry }
    }

    /// Runs all registered jobs, optionally stopping each after a number of ticks.
    ///
    /// Without a tick limit this runs until the process is stopped.
    pub async fn run(&self, max_ticks_per_job: Option<u64>) -> StdResult<()> {
        let templates = self.registry.job_templates().await;
        if templates.is_empty() {
            return Err(anyhow!("No job template registered, nothing to schedule"));
        }

        let mut handles = Vec::new();
        for template in templates {
            handles.push(tokio::spawn(Self::drive_job(template, max_ticks_per_job)));
        }
        for handle in handles {
            handle.await?;
        }

        Ok(())
    }

    async fn drive_job(template: JobTemplate, max_ticks: Option<u64>) {
        info!(
            "Scheduling job {} on queue {} every {:?}",
            template.template_id(),
            template.queue_name(),
            template.period()
        );
        let mut tick_interval = interval(template.period());
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut completed_ticks = 0;
        loop {
            tick_interval.tick().await;
            match template.runner().run_tick().await {
                Ok(report) => info!("Job {} completed: {report}", template.template_id()),
                Err(e) => warn!("Job {} tick failed: {e}", template.template_id()),
            }
            completed_ticks += 1;
            if let Some(max_ticks) = max_ticks {
                if completed_ticks >= max_ticks {
                    break;
                }
            }
        }
    }
}
