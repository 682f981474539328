pub mod aggregator;
pub mod comparator;
pub mod comparison;
pub mod distance;
pub mod engine;
pub mod pipeline;
pub mod port_matcher;

pub use crate::domain::model::QuoteRequest;
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::domain::report::QuoteOutcome;
pub use crate::utils::error::Result;
