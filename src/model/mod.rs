mod entities;
mod error;
mod report;

pub use entities::*;
pub use error::*;
pub use report::*;
