use chrono::{DateTime, Utc};

use crate::RawRepoRecord;

/// A trait for mapping a raw repository record to persistence-ready records.
///
/// Implementations must be pure: no I/O, no shared state, deterministic given
/// the record and the tick timestamp.
#[cfg_attr(test, mockall::automock)]
pub trait RecordTransformer<R: Send + Sync + 'static>: Sync + Send {
    /// Maps one raw record to zero or more persistable records.
    fn transform(&self, raw: &RawRepoRecord, harvested_at: DateTime<Utc>) -> Vec<R>;
}
