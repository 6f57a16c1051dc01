use chrono::{DateTime, Utc};

use crate::{MetricRecord, RawRepoRecord, RecordTransformer, RepositoryAttribute};

/// The default namespace prefix for harvested metric ids.
pub const DEFAULT_METRIC_PREFIX: &str = "mymetric.github";

/// Maps a raw repository record to one metric row per harvested attribute.
pub struct MetricTransformer {
    metric_prefix: String,
}

impl MetricTransformer {
    /// Creates a new `MetricTransformer` with the given metric id prefix.
    pub fn new(metric_prefix: &str) -> Self {
        Self {
            metric_prefix: metric_prefix.to_string(),
        }
    }
}

impl Default for MetricTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_METRIC_PREFIX)
    }
}

impl RecordTransformer<MetricRecord> for MetricTransformer {
    fn transform(&self, raw: &RawRepoRecord, harvested_at: DateTime<Utc>) -> Vec<MetricRecord> {
        RepositoryAttribute::ALL
            .iter()
            .map(|attribute| {
                MetricRecord::new(
                    &format!("{}.{}", self.metric_prefix, attribute.key()),
                    raw.attribute(attribute.key()),
                    raw.full_name(),
                    None,
                    None,
                    harvested_at,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_produces_one_metric_per_attribute() {
        let transformer = MetricTransformer::default();
        let raw = RawRepoRecord::dummy("org/repoA", "repoA", "", "https://x/a");
        let harvested_at = Utc::now();

        let records = transformer.transform(&raw, harvested_at);

        assert_eq!(
            vec![
                MetricRecord::new(
                    "mymetric.github.name",
                    "repoA",
                    "org/repoA",
                    None,
                    None,
                    harvested_at
                ),
                MetricRecord::new(
                    "mymetric.github.description",
                    "",
                    "org/repoA",
                    None,
                    None,
                    harvested_at
                ),
                MetricRecord::new(
                    "mymetric.github.html_url",
                    "https://x/a",
                    "org/repoA",
                    None,
                    None,
                    harvested_at
                ),
            ],
            records
        );
    }

    #[test]
    fn transform_uses_empty_values_for_missing_attributes() {
        let transformer = MetricTransformer::default();
        let raw: RawRepoRecord = serde_json::from_value(serde_json::json!({})).unwrap();

        let records = transformer.transform(&raw, Utc::now());

        assert_eq!(3, records.len());
        for record in &records {
            assert_eq!("", record.value());
            assert_eq!("", record.target_resource_id());
        }
    }

    #[test]
    fn transform_is_deterministic_for_a_fixed_timestamp() {
        let transformer = MetricTransformer::new("custom.prefix");
        let raw = RawRepoRecord::dummy("org/repoA", "repoA", "A repo", "https://x/a");
        let harvested_at = Utc::now();

        let first = transformer.transform(&raw, harvested_at);
        let second = transformer.transform(&raw, harvested_at);

        assert_eq!(first, second);
        assert_eq!("custom.prefix.name", first[0].metric_id());
    }
}
