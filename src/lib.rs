//! A periodic harvester that fetches GitHub repository metadata and persists
//! it to a relational or document store, one full resync per tick.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
