use crate::error::Result;
use crate::models::{MonthlyAverages, MonthlyKey, Reading, YearlyExtremes, YearlyKey};
use crate::processors::ValidityPolicy;
use crate::utils::constants::{BAR_CHAR, BLUE, PURPLE, RED, RESET};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLayout {
    /// Two lines per day: max bar, then min bar.
    Vertical,
    /// One line per day with the min and max bars side by side.
    Horizontal,
}

#[derive(Serialize)]
struct YearlyDocument<'a> {
    year: i32,
    report: Option<&'a YearlyExtremes>,
}

#[derive(Serialize)]
struct MonthlyDocument<'a> {
    year: i32,
    month: u32,
    report: Option<&'a MonthlyAverages>,
}

#[derive(Serialize)]
struct ChartDocument<'a> {
    year: i32,
    month: u32,
    readings: &'a [&'a Reading],
}

/// Turns aggregate results into printable lines.
pub struct ReportFormatter {
    color: bool,
    policy: ValidityPolicy,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self {
            color: true,
            policy: ValidityPolicy::default(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_policy(mut self, policy: ValidityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn format_yearly(&self, year: i32, extremes: Option<&YearlyExtremes>) -> Vec<String> {
        let Some(extremes) = extremes else {
            return vec![format!("No data present for {}", year)];
        };

        let mut lines = vec![format!("Yearly report for {}", year)];

        for key in YearlyKey::ALL {
            let attribute = key.attribute();
            let line = match extremes.get(key).and_then(|r| r.value(attribute).map(|v| (r, v))) {
                Some((reading, value)) => format!(
                    "{}: {}{} on {}",
                    yearly_label(key),
                    value,
                    attribute.units(),
                    reading.date.format("%B %d")
                ),
                None => format!("No {} data available.", yearly_missing_label(key)),
            };
            lines.push(line);
        }

        lines
    }

    pub fn format_monthly(
        &self,
        year: i32,
        month: u32,
        averages: Option<&MonthlyAverages>,
    ) -> Vec<String> {
        let Some(averages) = averages else {
            return vec![no_data_for_month(year, month)];
        };

        let mut lines = vec![month_heading(year, month)];

        for key in MonthlyKey::ALL {
            let value = averages
                .get(key)
                .map(|v| format!("{}{}", v, key.attribute().units()))
                .unwrap_or_else(|| "N/A".to_string());
            lines.push(format!("{}: {}", monthly_label(key), value));
        }

        lines
    }

    /// Bar chart of one month; `readings` are expected in date order.
    pub fn format_chart(
        &self,
        year: i32,
        month: u32,
        readings: &[&Reading],
        layout: ChartLayout,
    ) -> Vec<String> {
        let Some(first) = readings.first() else {
            return vec![no_data_for_month(year, month)];
        };

        let mut lines = vec![first.date.format("%B %Y").to_string()];
        for reading in readings {
            lines.extend(self.temperature_bars(reading, layout));
        }

        lines
    }

    /// Chart lines for a single day; empty unless both temperatures are valid.
    pub fn temperature_bars(&self, reading: &Reading, layout: ChartLayout) -> Vec<String> {
        let Some((max, min)) = self.charted_temperatures(reading) else {
            return Vec::new();
        };

        let day = format!("{:02}", reading.date.day());
        let (red, blue, purple, reset) = (
            self.paint(RED),
            self.paint(BLUE),
            self.paint(PURPLE),
            self.paint(RESET),
        );

        match layout {
            ChartLayout::Vertical => vec![
                format!("{day} {red}{} {purple}{max}C{reset}", bar(max)),
                format!("{day} {blue}{} {purple}{min}C{reset}", bar(min)),
            ],
            ChartLayout::Horizontal => vec![format!(
                "{day} {blue}{}{BAR_CHAR}{red}{}{purple} {min}C - {max}C{reset}",
                bar(min),
                bar(max)
            )],
        }
    }

    pub fn yearly_json(&self, year: i32, extremes: Option<&YearlyExtremes>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&YearlyDocument {
            year,
            report: extremes,
        })?)
    }

    pub fn monthly_json(
        &self,
        year: i32,
        month: u32,
        averages: Option<&MonthlyAverages>,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(&MonthlyDocument {
            year,
            month,
            report: averages,
        })?)
    }

    /// JSON counterpart of [`ReportFormatter::format_chart`], with the same days.
    pub fn chart_json(&self, year: i32, month: u32, readings: &[&Reading]) -> Result<String> {
        let charted: Vec<&Reading> = readings
            .iter()
            .copied()
            .filter(|r| self.charted_temperatures(r).is_some())
            .collect();

        Ok(serde_json::to_string_pretty(&ChartDocument {
            year,
            month,
            readings: &charted,
        })?)
    }

    /// Max and min of a day, when both are valid under the policy.
    fn charted_temperatures(&self, reading: &Reading) -> Option<(i32, i32)> {
        let max = reading.max_temp.filter(|v| self.policy.is_valid(Some(*v)))?;
        let min = reading.min_temp.filter(|v| self.policy.is_valid(Some(*v)))?;
        Some((max, min))
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn bar(value: i32) -> String {
    BAR_CHAR.to_string().repeat(value.max(0) as usize)
}

fn yearly_label(key: YearlyKey) -> &'static str {
    match key {
        YearlyKey::HighestTemperature => "Highest",
        YearlyKey::LowestTemperature => "Lowest",
        YearlyKey::HighestMeanHumidityDay => "Humidity",
    }
}

fn yearly_missing_label(key: YearlyKey) -> &'static str {
    match key {
        YearlyKey::HighestTemperature => "highest temperature",
        YearlyKey::LowestTemperature => "lowest temperature",
        YearlyKey::HighestMeanHumidityDay => "humidity",
    }
}

fn monthly_label(key: MonthlyKey) -> &'static str {
    match key {
        MonthlyKey::HighestAverageTemp => "Highest Average",
        MonthlyKey::LowestAverageTemp => "Lowest Average",
        MonthlyKey::AverageMeanHumidity => "Average Mean Humidity",
    }
}

fn month_heading(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}/{:02}", year, month))
}

fn no_data_for_month(year: i32, month: u32) -> String {
    format!("No data available for {}/{:02}", year, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reading(d: u32, max: Option<i32>, min: Option<i32>, hum: Option<i32>) -> Reading {
        Reading::new(NaiveDate::from_ymd_opt(2006, 1, d).unwrap(), max, min, hum)
    }

    fn plain() -> ReportFormatter {
        ReportFormatter::new().with_color(false)
    }

    #[test]
    fn test_yearly_lines() {
        let extremes = YearlyExtremes {
            highest_temperature: Some(reading(2, Some(20), Some(-5), Some(80))),
            lowest_temperature: Some(reading(2, Some(20), Some(-5), Some(80))),
            highest_mean_humidity_day: None,
        };

        assert_eq!(
            plain().format_yearly(2006, Some(&extremes)),
            vec![
                "Yearly report for 2006",
                "Highest: 20C on January 02",
                "Lowest: -5C on January 02",
                "No humidity data available.",
            ]
        );
        assert_eq!(plain().format_yearly(1999, None), vec!["No data present for 1999"]);
    }

    #[test]
    fn test_monthly_lines() {
        let averages = MonthlyAverages {
            highest_average_temp: Some(15),
            lowest_average_temp: Some(-2),
            average_mean_humidity: None,
        };

        assert_eq!(
            plain().format_monthly(2006, 1, Some(&averages)),
            vec![
                "January 2006",
                "Highest Average: 15C",
                "Lowest Average: -2C",
                "Average Mean Humidity: N/A",
            ]
        );
        assert_eq!(
            plain().format_monthly(2006, 6, None),
            vec!["No data available for 2006/06"]
        );
    }

    #[test]
    fn test_vertical_chart() {
        let first = reading(1, Some(3), Some(1), None);
        let skipped = reading(2, Some(4), None, None);
        let readings = vec![&first, &skipped];

        assert_eq!(
            plain().format_chart(2006, 1, &readings, ChartLayout::Vertical),
            vec!["January 2006", "01 +++ 3C", "01 + 1C"]
        );
    }

    #[test]
    fn test_horizontal_chart_clamps_negative_bars() {
        let day = reading(5, Some(2), Some(-4), None);

        assert_eq!(
            plain().temperature_bars(&day, ChartLayout::Horizontal),
            vec!["05 +++ -4C - 2C"]
        );
    }

    #[test]
    fn test_zero_temperature_day_is_skipped_by_default() {
        let day = reading(7, Some(5), Some(0), None);

        assert!(plain().temperature_bars(&day, ChartLayout::Vertical).is_empty());
        assert_eq!(
            plain()
                .with_policy(ValidityPolicy::PresentOnly)
                .temperature_bars(&day, ChartLayout::Vertical),
            vec!["07 +++++ 5C", "07  0C"]
        );
    }

    #[test]
    fn test_colored_bars() {
        let day = reading(1, Some(2), Some(1), None);
        let lines = ReportFormatter::new().temperature_bars(&day, ChartLayout::Vertical);

        assert_eq!(lines[0], format!("01 {RED}++ {PURPLE}2C{RESET}"));
        assert_eq!(lines[1], format!("01 {BLUE}+ {PURPLE}1C{RESET}"));
    }

    #[test]
    fn test_empty_chart_reports_no_data() {
        assert_eq!(
            plain().format_chart(2006, 2, &[], ChartLayout::Horizontal),
            vec!["No data available for 2006/02"]
        );
    }

    #[test]
    fn test_chart_json_matches_text_days() {
        let shown = reading(1, Some(3), Some(1), None);
        let zero_min = reading(2, Some(4), Some(0), None);
        let missing_max = reading(3, None, Some(2), None);
        let readings = vec![&shown, &zero_min, &missing_max];

        let json: serde_json::Value =
            serde_json::from_str(&plain().chart_json(2006, 1, &readings).unwrap()).unwrap();
        let days = json["readings"].as_array().unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0]["date"], "2006-01-01");

        let kept = plain().with_policy(ValidityPolicy::PresentOnly);
        let json: serde_json::Value =
            serde_json::from_str(&kept.chart_json(2006, 1, &readings).unwrap()).unwrap();
        assert_eq!(json["readings"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_monthly_json_uses_semantic_keys() {
        let averages = MonthlyAverages {
            highest_average_temp: Some(15),
            lowest_average_temp: None,
            average_mean_humidity: Some(65),
        };
        let json: serde_json::Value =
            serde_json::from_str(&plain().monthly_json(2006, 1, Some(&averages)).unwrap()).unwrap();

        assert_eq!(json["month"], 1);
        assert_eq!(json["report"]["highest_average_temp"], 15);
        assert!(json["report"]["lowest_average_temp"].is_null());
        assert_eq!(json["report"]["average_mean_humidity"], 65);
    }
}
