use chrono::{DateTime, Utc};

use crate::{DocumentRecord, DocumentSource, RawRepoRecord, RecordTransformer};

/// Maps a raw repository record to one upsert-by-id document action.
pub struct DocumentTransformer {
    index: String,
    doc_type: String,
    shard_by_day: bool,
}

impl DocumentTransformer {
    /// Creates a new `DocumentTransformer` writing to a single index.
    pub fn new(index: &str, doc_type: &str) -> Self {
        Self {
            index: index.to_string(),
            doc_type: doc_type.to_string(),
            shard_by_day: false,
        }
    }

    /// Creates a `DocumentTransformer` writing to day-sharded indices.
    ///
    /// The index name gains a `-YYYY.MM.DD` suffix and the document id gains
    /// a timestamp suffix, so documents accumulate per day instead of being
    /// replaced.
    pub fn new_day_sharded(index: &str, doc_type: &str) -> Self {
        Self {
            index: index.to_string(),
            doc_type: doc_type.to_string(),
            shard_by_day: true,
        }
    }
}

impl RecordTransformer<DocumentRecord> for DocumentTransformer {
    fn transform(&self, raw: &RawRepoRecord, harvested_at: DateTime<Utc>) -> Vec<DocumentRecord> {
        let source = DocumentSource {
            name: raw.attribute("name").to_string(),
            description: raw.attribute("description").to_string(),
            html_url: raw.attribute("html_url").to_string(),
        };
        let (index, doc_id) = if self.shard_by_day {
            (
                format!("{}-{}", self.index, harvested_at.format("%Y.%m.%d")),
                format!("{}-{}", raw.full_name(), harvested_at.format("%Y%m%d%H%M%S")),
            )
        } else {
            (self.index.clone(), raw.full_name().to_string())
        };

        vec![DocumentRecord::new(&index, &self.doc_type, &doc_id, source)]
    }
}
