use crate::error::{Result, WeatherError};
use crate::readers::reading_reader::{ParseResult, ReadingReader};
use crate::readers::warnings::ParseWarningSink;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads every weather file of a directory into one reading collection.
pub struct DirectoryReader {
    reader: ReadingReader,
    file_extension: Option<String>,
}

impl DirectoryReader {
    pub fn new() -> Self {
        Self {
            reader: ReadingReader::new(),
            file_extension: None,
        }
    }

    pub fn with_reader(mut self, reader: ReadingReader) -> Self {
        self.reader = reader;
        self
    }

    /// Only read files with this extension (without the dot).
    pub fn with_file_extension(mut self, extension: Option<String>) -> Self {
        self.file_extension = extension.map(|e| e.trim_start_matches('.').to_string());
        self
    }

    /// Read all files of `dir` in file-name order.
    ///
    /// Readings keep file encounter order. Files that cannot be read are
    /// logged and skipped.
    pub fn read_directory(&self, dir: &Path, sink: &dyn ParseWarningSink) -> Result<ParseResult> {
        if !dir.is_dir() {
            return Err(WeatherError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut combined = ParseResult::default();

        for path in self.list_files(dir)? {
            match self.reader.read_file(&path, sink) {
                Ok(result) => {
                    combined.readings.extend(result.readings);
                    combined.stats.merge(result.stats);
                }
                Err(e) => {
                    tracing::error!(file = %path.display(), error = %e, "skipping unreadable weather file");
                }
            }
        }

        tracing::info!(
            dir = %dir.display(),
            files = combined.stats.files_read,
            readings = combined.readings.len(),
            dropped = combined.stats.rows_dropped,
            "loaded weather readings"
        );

        Ok(combined)
    }

    /// Regular, non-hidden files of `dir` matching the extension filter, sorted by name.
    pub fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if !entry.file_type()?.is_file() {
                continue;
            }

            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if hidden || !self.matches_extension(&path) {
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        match &self.file_extension {
            Some(wanted) => path
                .extension()
                .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
                .unwrap_or(false),
            None => true,
        }
    }
}

impl Default for DirectoryReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::warnings::CollectingWarningSink;
    use tempfile::TempDir;

    const HEADER: &str = "PKT,Max TemperatureC,Min TemperatureC, Mean Humidity";

    fn write(dir: &Path, name: &str, rows: &[&str]) {
        let mut content = format!("{HEADER}\n");
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_reads_files_in_name_order() -> Result<()> {
        let tmp = TempDir::new()?;
        write(tmp.path(), "b_2006_Feb.txt", &["2006-02-01,5,1,60"]);
        write(tmp.path(), "a_2006_Jan.txt", &["2006-01-31,7,2,55", "bad,1,1,1"]);
        fs::create_dir(tmp.path().join("nested"))?;
        fs::write(tmp.path().join(".DS_Store"), "junk")?;

        let sink = CollectingWarningSink::new();
        let result = DirectoryReader::new().read_directory(tmp.path(), &sink)?;

        assert_eq!(result.stats.files_read, 2);
        assert_eq!(result.readings.len(), 2);
        assert_eq!(result.readings[0].max_temp, Some(7));
        assert_eq!(result.readings[1].max_temp, Some(5));
        assert_eq!(result.stats.rows_dropped, 1);
        assert_eq!(sink.warnings()[0].file, "a_2006_Jan.txt");

        Ok(())
    }

    #[test]
    fn test_headerless_file_is_skipped() -> Result<()> {
        let tmp = TempDir::new()?;
        fs::write(tmp.path().join("empty.txt"), "")?;
        write(tmp.path(), "real.txt", &["2006-01-01,5,1,60"]);

        let sink = CollectingWarningSink::new();
        let result = DirectoryReader::new().read_directory(tmp.path(), &sink)?;

        assert_eq!(result.stats.files_read, 1);
        assert_eq!(result.readings.len(), 1);
        assert!(sink.is_empty());

        Ok(())
    }

    #[test]
    fn test_extension_filter() -> Result<()> {
        let tmp = TempDir::new()?;
        write(tmp.path(), "keep.txt", &["2006-01-01,5,1,60"]);
        write(tmp.path(), "skip.csv", &["2006-01-02,6,1,60"]);

        let reader = DirectoryReader::new().with_file_extension(Some(".txt".to_string()));
        let files = reader.list_files(tmp.path())?;

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.txt"));

        Ok(())
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let sink = CollectingWarningSink::new();
        let err = DirectoryReader::new()
            .read_directory(Path::new("/definitely/not/here"), &sink)
            .unwrap_err();

        assert!(matches!(err, WeatherError::DirectoryNotFound(_)));
    }
}
