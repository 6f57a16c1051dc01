mod authorizer;
mod fetcher;
mod runner;
mod transformer;
mod writer;

pub use authorizer::*;
pub use fetcher::*;
pub use runner::*;
pub use transformer::*;
pub use writer::*;
