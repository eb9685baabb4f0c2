use serde::{Deserialize, Serialize};

use super::reading::{Attribute, Reading};

/// Semantic keys of a yearly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearlyKey {
    HighestTemperature,
    LowestTemperature,
    HighestMeanHumidityDay,
}

impl YearlyKey {
    pub const ALL: [YearlyKey; 3] = [
        YearlyKey::HighestTemperature,
        YearlyKey::LowestTemperature,
        YearlyKey::HighestMeanHumidityDay,
    ];

    pub fn attribute(&self) -> Attribute {
        match self {
            YearlyKey::HighestTemperature => Attribute::MaxTemp,
            YearlyKey::LowestTemperature => Attribute::MinTemp,
            YearlyKey::HighestMeanHumidityDay => Attribute::MeanHumidity,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            YearlyKey::HighestTemperature => "highest_temperature",
            YearlyKey::LowestTemperature => "lowest_temperature",
            YearlyKey::HighestMeanHumidityDay => "highest_mean_humidity_day",
        }
    }

    /// Whether the extreme is the smallest value rather than the largest.
    pub fn seeks_minimum(&self) -> bool {
        matches!(self, YearlyKey::LowestTemperature)
    }
}

/// Semantic keys of a monthly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyKey {
    HighestAverageTemp,
    LowestAverageTemp,
    AverageMeanHumidity,
}

impl MonthlyKey {
    pub const ALL: [MonthlyKey; 3] = [
        MonthlyKey::HighestAverageTemp,
        MonthlyKey::LowestAverageTemp,
        MonthlyKey::AverageMeanHumidity,
    ];

    pub fn attribute(&self) -> Attribute {
        match self {
            MonthlyKey::HighestAverageTemp => Attribute::MaxTemp,
            MonthlyKey::LowestAverageTemp => Attribute::MinTemp,
            MonthlyKey::AverageMeanHumidity => Attribute::MeanHumidity,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonthlyKey::HighestAverageTemp => "highest_average_temp",
            MonthlyKey::LowestAverageTemp => "lowest_average_temp",
            MonthlyKey::AverageMeanHumidity => "average_mean_humidity",
        }
    }
}

/// Readings that attained each yearly extreme. Whole readings are kept so the
/// date of occurrence survives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyExtremes {
    pub highest_temperature: Option<Reading>,
    pub lowest_temperature: Option<Reading>,
    pub highest_mean_humidity_day: Option<Reading>,
}

impl YearlyExtremes {
    pub fn get(&self, key: YearlyKey) -> Option<&Reading> {
        match key {
            YearlyKey::HighestTemperature => self.highest_temperature.as_ref(),
            YearlyKey::LowestTemperature => self.lowest_temperature.as_ref(),
            YearlyKey::HighestMeanHumidityDay => self.highest_mean_humidity_day.as_ref(),
        }
    }

    pub fn set(&mut self, key: YearlyKey, reading: Option<Reading>) {
        match key {
            YearlyKey::HighestTemperature => self.highest_temperature = reading,
            YearlyKey::LowestTemperature => self.lowest_temperature = reading,
            YearlyKey::HighestMeanHumidityDay => self.highest_mean_humidity_day = reading,
        }
    }

    pub fn is_empty(&self) -> bool {
        YearlyKey::ALL.iter().all(|key| self.get(*key).is_none())
    }
}

/// Rounded monthly averages; `None` means no valid value was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAverages {
    pub highest_average_temp: Option<i32>,
    pub lowest_average_temp: Option<i32>,
    pub average_mean_humidity: Option<i32>,
}

impl MonthlyAverages {
    pub fn get(&self, key: MonthlyKey) -> Option<i32> {
        match key {
            MonthlyKey::HighestAverageTemp => self.highest_average_temp,
            MonthlyKey::LowestAverageTemp => self.lowest_average_temp,
            MonthlyKey::AverageMeanHumidity => self.average_mean_humidity,
        }
    }

    pub fn set(&mut self, key: MonthlyKey, value: Option<i32>) {
        match key {
            MonthlyKey::HighestAverageTemp => self.highest_average_temp = value,
            MonthlyKey::LowestAverageTemp => self.lowest_average_temp = value,
            MonthlyKey::AverageMeanHumidity => self.average_mean_humidity = value,
        }
    }
}
