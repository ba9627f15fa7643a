// src/lib.rs
pub mod aggregator;
pub mod error;
pub mod record;
pub mod report;

pub use aggregator::{AggregateState, LineOutcome, LogAggregator};
pub use error::{LineIssue, SourceError};
pub use record::LogRecord;
pub use report::{Report, TOP_ENDPOINTS};
