mod authorizer_static;
mod fetcher_rest;
mod job_harvest;
mod job_registry;
mod scheduler_periodic;
mod transformer_document;
mod transformer_metric;
mod writer_postgresql;
mod writer_search_index;

pub use authorizer_static::*;
pub use fetcher_rest::*;
pub use job_harvest::*;
pub use job_registry::*;
pub use scheduler_periodic::*;
pub use transformer_document::*;
pub use transformer_metric::*;
pub use writer_postgresql::*;
pub use writer_search_index::*;
