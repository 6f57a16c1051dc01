use std::time::Duration;

use log::info;
use sqlx::{PgPool, QueryBuilder, postgres::PgPoolOptions};

use crate::{BatchWriter, HarvestError, MetricRecord, StdResult};

/// A writer that appends metric rows to a PostgreSQL database.
///
/// The whole batch is inserted in a single transaction: either every row of
/// the tick is committed or none is. Rows are append-only; replaying a tick
/// inserts fresh rows rather than updating prior ones.
pub struct PostgresMetricWriter {
    pool: PgPool,
}

impl PostgresMetricWriter {
    /// Creates a new `PostgresMetricWriter` instance.
    pub async fn try_new(connection_string: &str, acquire_timeout: Duration) -> StdResult<Self> {
        Ok(Self {
            pool: PgPoolOptions::new()
                .max_connections(1)
                .acquire_timeout(acquire_timeout)
                .connect(connection_string)
                .await?,
        })
    }
}

#[async_trait::async_trait]
impl BatchWriter<MetricRecord> for PostgresMetricWriter {
    async fn write_batch(&self, records: &[MetricRecord]) -> StdResult<u32> {
        if records.is_empty() {
            return Ok(0);
        }
        // Session is scoped to the tick: the transaction rolls back on drop
        // if any statement or the commit fails.
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| HarvestError::Store(e.to_string()))?;
        let mut builder = QueryBuilder::new(
            "INSERT INTO harvest.metric \
             (metric_id, value, target_resource_id, organization_service_id, \
              organization_id, creation_timestamp) ",
        );
        builder.push_values(records, |mut row, record| {
            row.push_bind(record.metric_id().to_owned())
                .push_bind(record.value().to_owned())
                .push_bind(record.target_resource_id().to_owned())
                .push_bind(record.organization_service_id())
                .push_bind(record.organization_id())
                .push_bind(record.creation_timestamp());
        });
        builder
            .build()
            .execute(&mut *transaction)
            .await
            .map_err(|e| HarvestError::Store(e.to_string()))?;
        transaction
            .commit()
            .await
            .map_err(|e| HarvestError::Store(e.to_string()))?;
        info!("Inserted {} metric rows", records.len());

        Ok(records.len() as u32)
    }
}
