use crate::models::{Attribute, MonthlyAverages, MonthlyKey, Reading, YearlyExtremes, YearlyKey};
use crate::processors::reading_filter::{ReadingFilter, ValidityPolicy};
use serde::{Deserialize, Serialize};

/// How averages are rounded to whole numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour: 2.5 -> 2, -1.5 -> -2.
    #[default]
    HalfEven,
    /// Ties go away from zero: 2.5 -> 3, -1.5 -> -2.
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round(&self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfEven => value.round_ties_even(),
            RoundingMode::HalfAwayFromZero => value.round(),
        }
    }
}

/// Computes yearly extremes and monthly averages over a reading collection.
///
/// Every query re-scans the collection; nothing is cached between calls.
pub struct Aggregator {
    filter: ReadingFilter,
    rounding: RoundingMode,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            filter: ReadingFilter::new(),
            rounding: RoundingMode::default(),
        }
    }

    pub fn with_policy(mut self, policy: ValidityPolicy) -> Self {
        self.filter = ReadingFilter::with_policy(policy);
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Highest max temperature, lowest min temperature and most humid day of `year`.
    ///
    /// Returns `None` when the year has no readings or no attribute has a
    /// single valid value. Ties keep the earliest reading in input order.
    pub fn yearly_extremes(&self, readings: &[Reading], year: i32) -> Option<YearlyExtremes> {
        let year_readings = self.filter.select_by_year_month(readings, year, None);
        if year_readings.is_empty() {
            return None;
        }

        let valid = self
            .filter
            .select_valid_by_attribute(&year_readings, &Attribute::ALL);

        let mut extremes = YearlyExtremes::default();
        for key in YearlyKey::ALL {
            let candidates = valid.get(&key.attribute()).map(Vec::as_slice).unwrap_or(&[]);
            let extreme = find_extreme(candidates, key.attribute(), key.seeks_minimum());
            extremes.set(key, extreme.copied());
        }

        if extremes.is_empty() {
            None
        } else {
            Some(extremes)
        }
    }

    /// Rounded averages of each attribute over one month.
    ///
    /// Returns `None` when the month has no readings. An attribute without any
    /// valid value is absent rather than zero.
    pub fn monthly_averages(
        &self,
        readings: &[Reading],
        year: i32,
        month: u32,
    ) -> Option<MonthlyAverages> {
        let month_readings = self.filter.select_by_year_month(readings, year, Some(month));
        if month_readings.is_empty() {
            return None;
        }

        let mut averages = MonthlyAverages::default();
        for key in MonthlyKey::ALL {
            let values = self.filter.valid_values(&month_readings, key.attribute());
            averages.set(key, self.rounded_average(&values));
        }

        Some(averages)
    }

    /// One month of readings in date order, as drawn by the charts.
    pub fn select_for_chart<'a>(&self, readings: &'a [Reading], year: i32, month: u32) -> Vec<&'a Reading> {
        self.filter.select_sorted_by_year_month(readings, year, month)
    }

    pub fn rounded_average(&self, values: &[i32]) -> Option<i32> {
        if values.is_empty() {
            return None;
        }

        let sum: i64 = values.iter().map(|&v| v as i64).sum();
        let mean = sum as f64 / values.len() as f64;

        Some(self.rounding.round(mean) as i32)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// First reading holding the largest (or smallest) value of `attribute`.
fn find_extreme<'a>(
    candidates: &[&'a Reading],
    attribute: Attribute,
    seek_minimum: bool,
) -> Option<&'a Reading> {
    let mut best: Option<(&'a Reading, i32)> = None;

    for &reading in candidates {
        let Some(value) = reading.value(attribute) else {
            continue;
        };

        let better = match best {
            None => true,
            Some((_, current)) if seek_minimum => value < current,
            Some((_, current)) => value > current,
        };

        if better {
            best = Some((reading, value));
        }
    }

    best.map(|(reading, _)| reading)
}
