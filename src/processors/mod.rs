pub mod aggregator;
pub mod reading_filter;

pub use aggregator::{Aggregator, RoundingMode};
pub use reading_filter::{ReadingFilter, ValidityPolicy};
