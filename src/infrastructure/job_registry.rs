use std::{collections::BTreeMap, fmt::Debug, sync::Arc, time::Duration};

use anyhow::anyhow;
use log::info;
use tokio::sync::RwLock;

use crate::{HarvestRunner, StdResult};

/// A registered harvest job with its scheduling parameters.
#[derive(Clone)]
pub struct JobTemplate {
    /// The unique name of the job.
    template_id: String,

    /// The worker queue the job is dispatched on.
    queue_name: String,

    /// The period between two scheduled ticks.
    period: Duration,

    /// The job entry point.
    runner: Arc<dyn HarvestRunner>,
}

impl JobTemplate {
    /// Creates a new `JobTemplate` instance.
    pub fn new(
        template_id: &str,
        queue_name: &str,
        period: Duration,
        runner: Arc<dyn HarvestRunner>,
    ) -> Self {
        Self {
            template_id: template_id.to_string(),
            queue_name: queue_name.to_string(),
            period,
            runner,
        }
    }

    /// Retrieves the unique name of the job.
    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Retrieves the worker queue name.
    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    /// Retrieves the period between two scheduled ticks.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Retrieves the job entry point.
    pub fn runner(&self) -> Arc<dyn HarvestRunner> {
        self.runner.clone()
    }
}

impl Debug for JobTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobTemplate")
            .field("template_id", &self.template_id)
            .field("queue_name", &self.queue_name)
            .field("period", &self.period)
            .finish()
    }
}

/// An explicit registry of harvest job templates.
///
/// Jobs are registered and unregistered through the registry rather than
/// through ambient module state, so ownership of the registration lifecycle
/// is clear.
#[derive(Default)]
pub struct JobRegistry {
    templates: RwLock<BTreeMap<String, JobTemplate>>,
}

impl JobRegistry {
    /// Registers a job template, rejecting duplicate template ids.
    pub async fn register(&self, template: JobTemplate) -> StdResult<()> {
        let mut templates = self.templates.write().await;
        if templates.contains_key(template.template_id()) {
            return Err(anyhow!(
                "Job template already registered: {}",
                template.template_id()
            ));
        }
        info!(
            "Registered job template {} on queue {}",
            template.template_id(),
            template.queue_name()
        );
        templates.insert(template.template_id().to_string(), template);

        Ok(())
    }

    /// Unregisters a job template, returning whether it was registered.
    pub async fn unregister(&self, template_id: &str) -> bool {
        let mut templates = self.templates.write().await;
        templates.remove(template_id).is_some()
    }

    /// Retrieves all registered job templates.
    pub async fn job_templates(&self) -> Vec<JobTemplate> {
        let templates = self.templates.read().await;
        templates.values().cloned().collect()
    }

    /// Retrieves whether a job template is registered.
    pub async fn contains(&self, template_id: &str) -> bool {
        let templates = self.templates.read().await;
        templates.contains_key(template_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::MockHarvestRunner;

    use super::*;

    fn dummy_template(template_id: &str) -> JobTemplate {
        JobTemplate::new(
            template_id,
            "harvest-queue",
            Duration::from_secs(3600),
            Arc::new(MockHarvestRunner::new()),
        )
    }

    #[tokio::test]
    async fn register_and_unregister_template() {
        let registry = JobRegistry::default();

        registry
            .register(dummy_template("github-repo-harvest"))
            .await
            .unwrap();
        assert!(registry.contains("github-repo-harvest").await);

        assert!(registry.unregister("github-repo-harvest").await);
        assert!(!registry.contains("github-repo-harvest").await);
    }

    #[tokio::test]
    async fn register_fails_on_duplicate_template_id() {
        let registry = JobRegistry::default();

        registry
            .register(dummy_template("github-repo-harvest"))
            .await
            .unwrap();
        registry
            .register(dummy_template("github-repo-harvest"))
            .await
            .expect_err("Duplicate registration should fail");
    }

    #[tokio::test]
    async fn unregister_returns_false_when_not_registered() {
        let registry = JobRegistry::default();

        assert!(!registry.unregister("github-repo-harvest").await);
    }

    #[tokio::test]
    async fn job_templates_returns_all_registered_templates() {
        let registry = JobRegistry::default();
        registry.register(dummy_template("harvest-1")).await.unwrap();
        registry.register(dummy_template("harvest-2")).await.unwrap();

        let template_ids = registry
            .job_templates()
            .await
            .iter()
            .map(|template| template.template_id().to_string())
            .collect::<Vec<_>>();

        assert_eq!(vec!["harvest-1", "harvest-2"], template_ids);
    }
}
