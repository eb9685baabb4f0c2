use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{MAX_TEMPERATURE_COLUMN, MEAN_HUMIDITY_COLUMN, MIN_TEMPERATURE_COLUMN};

/// One day's observation. The date is always valid; every measurement may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub date: NaiveDate,
    pub max_temp: Option<i32>,
    pub min_temp: Option<i32>,
    pub mean_humidity: Option<i32>,
}

impl Reading {
    pub fn new(
        date: NaiveDate,
        max_temp: Option<i32>,
        min_temp: Option<i32>,
        mean_humidity: Option<i32>,
    ) -> Self {
        Self {
            date,
            max_temp,
            min_temp,
            mean_humidity,
        }
    }

    /// Value of `attribute` on this reading, if recorded.
    pub fn value(&self, attribute: Attribute) -> Option<i32> {
        attribute.value_of(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    MaxTemp,
    MinTemp,
    MeanHumidity,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::MaxTemp, Attribute::MinTemp, Attribute::MeanHumidity];

    pub fn value_of(&self, reading: &Reading) -> Option<i32> {
        match self {
            Attribute::MaxTemp => reading.max_temp,
            Attribute::MinTemp => reading.min_temp,
            Attribute::MeanHumidity => reading.mean_humidity,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::MaxTemp => "max_temp",
            Attribute::MinTemp => "min_temp",
            Attribute::MeanHumidity => "mean_humidity",
        }
    }

    /// Header of the source column this attribute is read from (trimmed).
    pub fn column_name(&self) -> &'static str {
        match self {
            Attribute::MaxTemp => MAX_TEMPERATURE_COLUMN,
            Attribute::MinTemp => MIN_TEMPERATURE_COLUMN,
            Attribute::MeanHumidity => MEAN_HUMIDITY_COLUMN,
        }
    }

    pub fn units(&self) -> &'static str {
        match self {
            Attribute::MaxTemp | Attribute::MinTemp => "C",
            Attribute::MeanHumidity => "%",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_attribute_dispatch() {
        let reading = Reading::new(date(2006, 1, 1), Some(10), Some(2), None);

        assert_eq!(reading.value(Attribute::MaxTemp), Some(10));
        assert_eq!(reading.value(Attribute::MinTemp), Some(2));
        assert_eq!(reading.value(Attribute::MeanHumidity), None);
    }

    #[test]
    fn test_zero_is_a_value() {
        let reading = Reading::new(date(2006, 1, 1), Some(0), Some(0), Some(0));
        for attribute in Attribute::ALL {
            assert_eq!(reading.value(attribute), Some(0));
        }
    }
}
