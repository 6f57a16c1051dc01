use std::{fmt::Display, ops::Deref};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw repository record as returned by the upstream API.
///
/// The upstream payload is an untyped JSON object; only a handful of keys are
/// of interest and any of them may be absent. Records are immutable once
/// fetched and discarded after transformation.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct RawRepoRecord(pub Map<String, Value>);

impl RawRepoRecord {
    /// Retrieves a string attribute, or an empty string if the key is absent
    /// or not a string.
    pub fn attribute(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Retrieves the fully qualified repository name, the unique identifier
    /// of the record within one tick.
    pub fn full_name(&self) -> &str {
        self.attribute("full_name")
    }

    /// Creates a dummy `RawRepoRecord` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(full_name: &str, name: &str, description: &str, html_url: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("full_name".to_string(), Value::String(full_name.to_string()));
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
        fields.insert("html_url".to_string(), Value::String(html_url.to_string()));

        Self(fields)
    }
}

impl Deref for RawRepoRecord {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The fixed set of repository attributes persisted by the harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryAttribute {
    /// The short repository name.
    Name,

    /// The repository description, possibly empty.
    Description,

    /// The repository web URL.
    HtmlUrl,
}

impl RepositoryAttribute {
    /// All harvested attributes, in persistence order.
    pub const ALL: [RepositoryAttribute; 3] = [
        RepositoryAttribute::Name,
        RepositoryAttribute::Description,
        RepositoryAttribute::HtmlUrl,
    ];

    /// The attribute key as it appears in the raw record and in metric ids.
    pub fn key(&self) -> &'static str {
        match self {
            RepositoryAttribute::Name => "name",
            RepositoryAttribute::Description => "description",
            RepositoryAttribute::HtmlUrl => "html_url",
        }
    }
}

impl Display for RepositoryAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single attribute-value row for the relational store.
///
/// Rows are created fresh each tick and appended; prior ticks' rows are never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRecord {
    /// The namespaced attribute key, e.g. `mymetric.github.name`.
    metric_id: String,

    /// The attribute value, empty string when the attribute is missing.
    value: String,

    /// The fully qualified repository name the row refers to.
    target_resource_id: String,

    /// Cloud account the resource may belong to.
    organization_service_id: Option<i64>,

    /// Organization the resource belongs to.
    organization_id: Option<i64>,

    /// The wall-clock timestamp of the tick that produced the row.
    creation_timestamp: DateTime<Utc>,
}

impl MetricRecord {
    /// Creates a new `MetricRecord` instance.
    pub fn new(
        metric_id: &str,
        value: &str,
        target_resource_id: &str,
        organization_service_id: Option<i64>,
        organization_id: Option<i64>,
        creation_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            metric_id: metric_id.to_string(),
            value: value.to_string(),
            target_resource_id: target_resource_id.to_string(),
            organization_service_id,
            organization_id,
            creation_timestamp,
        }
    }

    /// Retrieves the namespaced attribute key.
    pub fn metric_id(&self) -> &str {
        &self.metric_id
    }

    /// Retrieves the attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Retrieves the target resource identifier.
    pub fn target_resource_id(&self) -> &str {
        &self.target_resource_id
    }

    /// Retrieves the cloud account identifier, if any.
    pub fn organization_service_id(&self) -> Option<i64> {
        self.organization_service_id
    }

    /// Retrieves the organization identifier, if any.
    pub fn organization_id(&self) -> Option<i64> {
        self.organization_id
    }

    /// Retrieves the creation timestamp.
    pub fn creation_timestamp(&self) -> DateTime<Utc> {
        self.creation_timestamp
    }
}

impl Display for MetricRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Metric: id={}, target={}, value={}",
            self.metric_id, self.target_resource_id, self.value
        )
    }
}

/// The persisted body of a document record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    /// The short repository name.
    pub name: String,

    /// The repository description, empty string when missing.
    pub description: String,

    /// The repository web URL.
    pub html_url: String,
}

/// An upsert-by-id action for the document store.
///
/// A write with the same `doc_id` replaces the prior document, so replaying
/// an unchanged tick is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// The target index name.
    index: String,

    /// The document type within the index.
    doc_type: String,

    /// The document identifier, the fully qualified repository name.
    doc_id: String,

    /// The document body.
    source: DocumentSource,
}

impl DocumentRecord {
    /// Creates a new `DocumentRecord` instance.
    pub fn new(index: &str, doc_type: &str, doc_id: &str, source: DocumentSource) -> Self {
        Self {
            index: index.to_string(),
            doc_type: doc_type.to_string(),
            doc_id: doc_id.to_string(),
            source,
        }
    }

    /// Retrieves the target index name.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Retrieves the document type.
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Retrieves the document identifier.
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Retrieves the document body.
    pub fn source(&self) -> &DocumentSource {
        &self.source
    }
}

impl Display for DocumentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Document: index={}, id={}", self.index, self.doc_id)
    }
}
