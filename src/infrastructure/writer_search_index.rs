use std::time::Duration;

use log::info;
use serde::Deserialize;
use serde_json::json;

use crate::{BatchWriter, DocumentRecord, HarvestError, StdResult};

/// The default number of actions submitted per bulk request.
pub const DEFAULT_BULK_CHUNK_SIZE: usize = 500;

#[derive(Deserialize, Debug)]
struct BulkResponse {
    errors: bool,
}

/// A writer that upserts documents through a search index bulk endpoint.
///
/// Each record becomes an independent upsert-by-id action; a later write with
/// the same id replaces the prior document. Actions are submitted in bounded
/// chunks to stay under request size limits.
#[derive(Debug)]
pub struct SearchIndexWriter {
    client: reqwest::Client,
    endpoint: String,
    chunk_size: usize,
}

impl SearchIndexWriter {
    /// Creates a new `SearchIndexWriter` instance with a bounded request timeout.
    pub fn try_new(endpoint: &str, timeout: Duration, chunk_size: usize) -> StdResult<Self> {
        if chunk_size == 0 {
            return Err(anyhow::anyhow!("Bulk chunk size must be greater than zero"));
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            chunk_size,
        })
    }

    fn bulk_body(records: &[DocumentRecord]) -> StdResult<String> {
        let mut body = String::new();
        for record in records {
            let action = json!({
                "index": {
                    "_index": record.index(),
                    "_type": record.doc_type(),
                    "_id": record.doc_id(),
                }
            });
            body.push_str(&serde_json::to_string(&action)?);
            body.push('\n');
            body.push_str(&serde_json::to_string(record.source())?);
            body.push('\n');
        }

        Ok(body)
    }

    async fn submit_chunk(&self, records: &[DocumentRecord]) -> StdResult<()> {
        let body = Self::bulk_body(records)?;
        let response = self
            .client
            .post(format!("{}/_bulk", self.endpoint))
            .header("Content-Type", "application/x-ndjson")
            .body(body)
            .send()
            .await
            .map_err(|e| HarvestError::Store(e.to_string()))?;
        if !response.status().is_success() {
            return Err(HarvestError::Store(format!(
                "Unexpected status {} from bulk endpoint",
                response.status()
            ))
            .into());
        }
        let bulk_response = response
            .json::<BulkResponse>()
            .await
            .map_err(|e| HarvestError::Store(e.to_string()))?;
        if bulk_response.errors {
            // Per-action failures are not differentiated, the whole tick fails.
            return Err(HarvestError::Store(
                "Bulk response reported failed actions".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl BatchWriter<DocumentRecord> for SearchIndexWriter {
    async fn write_batch(&self, records: &[DocumentRecord]) -> StdResult<u32> {
        for chunk in records.chunks(self.chunk_size) {
            self.submit_chunk(chunk).await?;
        }
        info!("Upserted {} documents", records.len());

        Ok(records.len() as u32)
    }
}
