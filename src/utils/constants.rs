/// Date column headers; the alternate is used when the primary is absent
pub const DATE_COLUMN: &str = "PKT";
pub const ALTERNATE_DATE_COLUMN: &str = "PKST";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Numeric column headers (matched after trimming)
pub const MAX_TEMPERATURE_COLUMN: &str = "Max TemperatureC";
pub const MIN_TEMPERATURE_COLUMN: &str = "Min TemperatureC";
pub const MEAN_HUMIDITY_COLUMN: &str = "Mean Humidity";

/// Header occupies row 1, so data rows are numbered from 2
pub const FIRST_DATA_ROW: usize = 2;

/// Defaults
pub const DEFAULT_DATA_DIR: &str = "weatherfiles";
pub const DEFAULT_CONFIG_FILE: &str = "weatherman.toml";
pub const ENV_PREFIX: &str = "WEATHERMAN";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Chart rendering
pub const BAR_CHAR: char = '+';
pub const RED: &str = "\x1b[91m";
pub const BLUE: &str = "\x1b[94m";
pub const PURPLE: &str = "\x1b[95m";
pub const RESET: &str = "\x1b[0m";
