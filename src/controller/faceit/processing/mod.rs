pub mod sanitize;
pub mod stats_aggregator;

pub use sanitize::*;
pub use stats_aggregator::*;
