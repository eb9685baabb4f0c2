use crate::cli::args::{Cli, OutputFormat};
use crate::error::Result;
use crate::models::{parse_year, parse_year_month, Reading};
use crate::processors::Aggregator;
use crate::readers::{DirectoryReader, ParseWarningSink, ReadingReader, TracingWarningSink};
use crate::settings::Settings;
use crate::writers::{ChartLayout, ReportFormatter};
use std::io::{self, Write};

/// Run the reports requested on the command line, printing to stdout/stderr.
pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(cli, settings, &TracingWarningSink, &mut stdout.lock(), &mut stderr.lock())
}

/// Load the readings once, then answer every requested report in order:
/// yearly, monthly, vertical charts, horizontal charts.
///
/// Bad tokens are reported on `err` and skipped; they never abort the run.
pub fn execute(
    cli: &Cli,
    settings: &Settings,
    sink: &dyn ParseWarningSink,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let reader = DirectoryReader::new()
        .with_reader(ReadingReader::with_partial_rows(settings.allow_partial_rows))
        .with_file_extension(settings.file_extension.clone());
    let parsed = reader.read_directory(&settings.data_dir, sink)?;

    if !cli.has_reports() {
        writeln!(
            out,
            "Loaded {} readings from {} files ({} rows dropped)",
            parsed.readings.len(),
            parsed.stats.files_read,
            parsed.stats.rows_dropped
        )?;
        writeln!(
            out,
            "Use -e YEAR, -a YEAR/MONTH, -c YEAR/MONTH or -b YEAR/MONTH to generate reports"
        )?;
        return Ok(());
    }

    let session = ReportSession {
        readings: &parsed.readings,
        aggregator: Aggregator::new()
            .with_policy(settings.zero_values)
            .with_rounding(settings.rounding),
        formatter: ReportFormatter::new()
            .with_color(settings.color)
            .with_policy(settings.zero_values),
        format: cli.format,
    };
    let mut printer = BlockPrinter { out, printed: 0 };

    for token in &cli.yearly {
        match parse_year(token) {
            Ok(year) => printer.print(&session.yearly(year)?)?,
            Err(e) => writeln!(err, "{}", e)?,
        }
    }

    for token in &cli.monthly {
        match parse_year_month(token) {
            Ok((year, month)) => printer.print(&session.monthly(year, month)?)?,
            Err(e) => writeln!(err, "{}", e)?,
        }
    }

    for (tokens, layout) in [
        (&cli.chart, ChartLayout::Vertical),
        (&cli.hchart, ChartLayout::Horizontal),
    ] {
        for token in tokens {
            match parse_year_month(token) {
                Ok((year, month)) => printer.print(&session.chart(year, month, layout)?)?,
                Err(e) => writeln!(err, "{}", e)?,
            }
        }
    }

    Ok(())
}

struct ReportSession<'a> {
    readings: &'a [Reading],
    aggregator: Aggregator,
    formatter: ReportFormatter,
    format: OutputFormat,
}

impl ReportSession<'_> {
    fn yearly(&self, year: i32) -> Result<Vec<String>> {
        let extremes = self.aggregator.yearly_extremes(self.readings, year);
        if extremes.is_none() {
            tracing::info!(year, "no yearly data");
        }

        Ok(match self.format {
            OutputFormat::Text => self.formatter.format_yearly(year, extremes.as_ref()),
            OutputFormat::Json => vec![self.formatter.yearly_json(year, extremes.as_ref())?],
        })
    }

    fn monthly(&self, year: i32, month: u32) -> Result<Vec<String>> {
        let averages = self.aggregator.monthly_averages(self.readings, year, month);
        if averages.is_none() {
            tracing::info!(year, month, "no monthly data");
        }

        Ok(match self.format {
            OutputFormat::Text => self.formatter.format_monthly(year, month, averages.as_ref()),
            OutputFormat::Json => vec![self.formatter.monthly_json(year, month, averages.as_ref())?],
        })
    }

    fn chart(&self, year: i32, month: u32, layout: ChartLayout) -> Result<Vec<String>> {
        let days = self.aggregator.select_for_chart(self.readings, year, month);

        Ok(match self.format {
            OutputFormat::Text => self.formatter.format_chart(year, month, &days, layout),
            OutputFormat::Json => vec![self.formatter.chart_json(year, month, &days)?],
        })
    }
}

/// Writes report blocks separated by a blank line.
struct BlockPrinter<'w> {
    out: &'w mut dyn Write,
    printed: usize,
}

impl BlockPrinter<'_> {
    fn print(&mut self, lines: &[String]) -> Result<()> {
        if self.printed > 0 {
            writeln!(self.out)?;
        }
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        self.printed += 1;
        Ok(())
    }
}
