pub mod directory_reader;
pub mod reading_reader;
pub mod warnings;

pub use directory_reader::DirectoryReader;
pub use reading_reader::{ParseResult, ParseStats, ReadingReader};
pub use warnings::{
    CollectingWarningSink, ParseErrorKind, ParseWarning, ParseWarningSink, TracingWarningSink,
};
