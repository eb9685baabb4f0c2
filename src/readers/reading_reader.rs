use crate::error::{Result, WeatherError};
use crate::models::{Attribute, Reading};
use crate::readers::warnings::{ParseErrorKind, ParseWarningSink};
use crate::utils::constants::{ALTERNATE_DATE_COLUMN, DATE_COLUMN, DATE_FORMAT, FIRST_DATA_ROW};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Row counts gathered while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub files_read: usize,
    pub rows_read: usize,
    pub rows_dropped: usize,
}

impl ParseStats {
    pub fn rows_kept(&self) -> usize {
        self.rows_read - self.rows_dropped
    }

    pub fn merge(&mut self, other: ParseStats) {
        self.files_read += other.files_read;
        self.rows_read += other.rows_read;
        self.rows_dropped += other.rows_dropped;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub readings: Vec<Reading>,
    pub stats: ParseStats,
}

/// Positions of the columns we care about within a file's header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: Option<usize>,
    max_temp: Option<usize>,
    min_temp: Option<usize>,
    mean_humidity: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        Self {
            date: position(DATE_COLUMN).or_else(|| position(ALTERNATE_DATE_COLUMN)),
            max_temp: position(Attribute::MaxTemp.column_name()),
            min_temp: position(Attribute::MinTemp.column_name()),
            mean_humidity: position(Attribute::MeanHumidity.column_name()),
        }
    }

    fn attribute(&self, attribute: Attribute) -> Option<usize> {
        match attribute {
            Attribute::MaxTemp => self.max_temp,
            Attribute::MinTemp => self.min_temp,
            Attribute::MeanHumidity => self.mean_humidity,
        }
    }
}

/// Parses delimited daily weather files into [`Reading`]s.
pub struct ReadingReader {
    allow_partial_rows: bool,
}

impl ReadingReader {
    pub fn new() -> Self {
        Self {
            allow_partial_rows: false,
        }
    }

    /// When enabled, an empty numeric cell becomes an absent value instead of
    /// dropping the whole row.
    pub fn with_partial_rows(allow_partial_rows: bool) -> Self {
        Self { allow_partial_rows }
    }

    /// Read every valid row of the file at `path`.
    pub fn read_file(&self, path: &Path, sink: &dyn ParseWarningSink) -> Result<ParseResult> {
        let file = File::open(path)?;
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let result = self.read_from(&file_name, file, sink)?;

        tracing::debug!(
            file = %file_name,
            kept = result.stats.rows_kept(),
            dropped = result.stats.rows_dropped,
            "parsed weather file"
        );

        Ok(result)
    }

    /// Read rows from any source; `source_name` is used in warnings.
    pub fn read_from<R: Read>(
        &self,
        source_name: &str,
        source: R,
        sink: &dyn ParseWarningSink,
    ) -> Result<ParseResult> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = rdr.headers()?;
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(WeatherError::MissingHeader(source_name.to_string()));
        }

        let columns = ColumnIndex::from_headers(headers);
        let mut result = ParseResult {
            readings: Vec::new(),
            stats: ParseStats {
                files_read: 1,
                ..ParseStats::default()
            },
        };

        for (idx, record) in rdr.records().enumerate() {
            let row_num = idx + FIRST_DATA_ROW;
            result.stats.rows_read += 1;

            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    sink.warn(source_name, row_num, ParseErrorKind::MalformedRow, &e.to_string());
                    result.stats.rows_dropped += 1;
                    continue;
                }
            };

            match self.parse_row(&record, &columns, source_name, row_num, sink) {
                Some(reading) => result.readings.push(reading),
                None => result.stats.rows_dropped += 1,
            }
        }

        Ok(result)
    }

    /// Parse one data row, reporting and returning `None` when it must be dropped.
    fn parse_row(
        &self,
        record: &csv::StringRecord,
        columns: &ColumnIndex,
        source_name: &str,
        row_num: usize,
        sink: &dyn ParseWarningSink,
    ) -> Option<Reading> {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::trim);

        let date_str = cell(columns.date).unwrap_or("");
        if date_str.is_empty() {
            sink.warn(
                source_name,
                row_num,
                ParseErrorKind::MissingColumns,
                "Date column missing",
            );
            return None;
        }

        let Ok(date) = NaiveDate::parse_from_str(date_str, DATE_FORMAT) else {
            sink.warn(
                source_name,
                row_num,
                ParseErrorKind::InvalidDate,
                &format!("'{}'", date_str),
            );
            return None;
        };

        let mut values = [None; 3];
        let mut invalid_columns = Vec::new();

        for (slot, attribute) in values.iter_mut().zip(Attribute::ALL) {
            let raw = cell(columns.attribute(attribute)).unwrap_or("");

            if raw.is_empty() && self.allow_partial_rows {
                continue;
            }

            match raw.parse::<i32>() {
                Ok(value) => *slot = Some(value),
                Err(_) => invalid_columns.push(attribute.column_name()),
            }
        }

        if !invalid_columns.is_empty() {
            sink.warn(
                source_name,
                row_num,
                ParseErrorKind::ValueError,
                &format!("Invalid values in: {}", invalid_columns.join(", ")),
            );
            return None;
        }

        let [max_temp, min_temp, mean_humidity] = values;
        Some(Reading::new(date, max_temp, min_temp, mean_humidity))
    }
}

impl Default for ReadingReader {
    fn default() -> Self {
        Self::new()
    }
}
