pub mod query;
pub mod reading;
pub mod report;

pub use query::{parse_year, parse_year_month, Period};
pub use reading::{Attribute, Reading};
pub use report::{MonthlyAverages, MonthlyKey, YearlyExtremes, YearlyKey};
