pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{Result, WeatherError};
pub use models::{Attribute, MonthlyAverages, Reading, YearlyExtremes};
pub use processors::{Aggregator, ReadingFilter, RoundingMode, ValidityPolicy};
