pub mod report_formatter;

pub use report_formatter::{ChartLayout, ReportFormatter};
