use crate::error::Result;
use crate::processors::ValidityPolicy;
use crate::settings::Settings;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "weatherman")]
#[command(about = "Yearly extremes, monthly averages and temperature charts from daily weather files")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Directory containing weather data files [default: from settings]")]
    pub directory: Option<PathBuf>,

    #[arg(short = 'e', long, value_name = "YEAR", num_args = 1.., help = "Yearly extremes for YEAR(s)")]
    pub yearly: Vec<String>,

    #[arg(
        short = 'a',
        long,
        value_name = "YEAR/MONTH",
        num_args = 1..,
        help = "Monthly averages for YEAR/MONTH(s), e.g. 2006/3"
    )]
    pub monthly: Vec<String>,

    #[arg(short = 'c', long, value_name = "YEAR/MONTH", num_args = 1.., help = "Vertical temperature charts")]
    pub chart: Vec<String>,

    #[arg(short = 'b', long, value_name = "YEAR/MONTH", num_args = 1.., help = "Horizontal temperature charts")]
    pub hchart: Vec<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Disable ANSI colors in charts")]
    pub no_color: bool,

    #[arg(long, help = "Count zero values as valid measurements")]
    pub keep_zero_values: bool,

    #[arg(long, help = "Settings file (TOML) [default: ./weatherman.toml if present]")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn has_reports(&self) -> bool {
        !(self.yearly.is_empty()
            && self.monthly.is_empty()
            && self.chart.is_empty()
            && self.hchart.is_empty())
    }

    /// Load settings and apply the flags given on the command line on top.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let settings = Settings::load(self.config.as_deref())?;
        Ok(self.apply_overrides(settings))
    }

    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.directory {
            settings.data_dir = dir.clone();
        }
        if self.no_color {
            settings.color = false;
        }
        if self.keep_zero_values {
            settings.zero_values = ValidityPolicy::PresentOnly;
        }
        if let Some(log_file) = &self.log_file {
            settings.log_file = Some(log_file.clone());
        }
        settings
    }
}
