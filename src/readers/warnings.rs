use std::cell::RefCell;
use std::fmt;

/// Why a source row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The date cell is missing or empty.
    MissingColumns,
    /// The date cell does not parse as `YYYY-MM-DD`.
    InvalidDate,
    /// One or more numeric cells failed integer parsing.
    ValueError,
    /// The CSV reader could not decode the row.
    MalformedRow,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingColumns => "MissingColumns",
            ParseErrorKind::InvalidDate => "InvalidDate",
            ParseErrorKind::ValueError => "ValueError",
            ParseErrorKind::MalformedRow => "MalformedRow",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub file: String,
    pub row: usize,
    pub kind: ParseErrorKind,
    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, row {}: {} - {}",
            self.file, self.row, self.kind, self.message
        )
    }
}

/// Receives row-level ingestion warnings.
///
/// Readers never fail on a bad row; they report it here and move on.
pub trait ParseWarningSink {
    fn warn(&self, file: &str, row: usize, kind: ParseErrorKind, message: &str);
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWarningSink;

impl ParseWarningSink for TracingWarningSink {
    fn warn(&self, file: &str, row: usize, kind: ParseErrorKind, message: &str) {
        tracing::warn!(
            file,
            row,
            kind = kind.as_str(),
            "{}, row {}: {} - {}",
            file,
            row,
            kind,
            message
        );
    }
}

/// Keeps warnings in memory, in the order they were raised.
#[derive(Debug, Default)]
pub struct CollectingWarningSink {
    warnings: RefCell<Vec<ParseWarning>>,
}

impl CollectingWarningSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<ParseWarning> {
        self.warnings.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }

    pub fn into_warnings(self) -> Vec<ParseWarning> {
        self.warnings.into_inner()
    }
}

impl ParseWarningSink for CollectingWarningSink {
    fn warn(&self, file: &str, row: usize, kind: ParseErrorKind, message: &str) {
        self.warnings.borrow_mut().push(ParseWarning {
            file: file.to_string(),
            row,
            kind,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::resolve_log_level;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_sink_is_visible_at_default_level() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(resolve_log_level(false, None)))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingWarningSink.warn("Murree_weather_2006_Jan.txt", 3, ParseErrorKind::InvalidDate, "'bad'");
        });

        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN"));
        assert!(logged.contains("Murree_weather_2006_Jan.txt, row 3: InvalidDate - 'bad'"));
    }

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingWarningSink::new();
        assert!(sink.is_empty());

        sink.warn("a.txt", 2, ParseErrorKind::InvalidDate, "'2006-13-01'");
        sink.warn("a.txt", 5, ParseErrorKind::ValueError, "Invalid values in: Mean Humidity");

        let warnings = sink.into_warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].row, 2);
        assert_eq!(warnings[1].kind, ParseErrorKind::ValueError);
        assert_eq!(
            warnings[0].to_string(),
            "a.txt, row 2: InvalidDate - '2006-13-01'"
        );
    }
}
