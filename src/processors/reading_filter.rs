use crate::models::{Attribute, Reading};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decides whether a recorded value counts as valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityPolicy {
    /// A value of exactly 0 is treated like a missing one. This drops genuine
    /// zero readings and is kept for compatibility with existing reports.
    #[default]
    TreatZeroAsMissing,
    /// Any recorded value is valid, including 0.
    PresentOnly,
}

impl ValidityPolicy {
    pub fn is_valid(&self, value: Option<i32>) -> bool {
        match (self, value) {
            (_, None) => false,
            (ValidityPolicy::TreatZeroAsMissing, Some(v)) => v != 0,
            (ValidityPolicy::PresentOnly, Some(_)) => true,
        }
    }
}

/// Selects readings by period and by attribute validity.
pub struct ReadingFilter {
    policy: ValidityPolicy,
}

impl ReadingFilter {
    pub fn new() -> Self {
        Self {
            policy: ValidityPolicy::default(),
        }
    }

    pub fn with_policy(policy: ValidityPolicy) -> Self {
        Self { policy }
    }

    /// Readings of `year` (and `month`, if given) in their original relative order.
    pub fn select_by_year_month<'a>(
        &self,
        readings: &'a [Reading],
        year: i32,
        month: Option<u32>,
    ) -> Vec<&'a Reading> {
        readings
            .iter()
            .filter(|r| r.date.year() == year && month.map_or(true, |m| r.date.month() == m))
            .collect()
    }

    /// Readings of one month in ascending date order.
    pub fn select_sorted_by_year_month<'a>(
        &self,
        readings: &'a [Reading],
        year: i32,
        month: u32,
    ) -> Vec<&'a Reading> {
        let mut selected = self.select_by_year_month(readings, year, Some(month));
        selected.sort_by_key(|r| r.date);
        selected
    }

    pub fn is_valid(&self, reading: &Reading, attribute: Attribute) -> bool {
        self.policy.is_valid(reading.value(attribute))
    }

    /// For each attribute, the readings holding a valid value for it.
    pub fn select_valid_by_attribute<'a>(
        &self,
        readings: &[&'a Reading],
        attributes: &[Attribute],
    ) -> BTreeMap<Attribute, Vec<&'a Reading>> {
        attributes
            .iter()
            .map(|&attribute| {
                let valid = readings
                    .iter()
                    .copied()
                    .filter(|r| self.is_valid(r, attribute))
                    .collect();
                (attribute, valid)
            })
            .collect()
    }

    /// Valid values of `attribute`, in reading order.
    pub fn valid_values(&self, readings: &[&Reading], attribute: Attribute) -> Vec<i32> {
        readings
            .iter()
            .filter_map(|r| r.value(attribute))
            .filter(|v| self.policy.is_valid(Some(*v)))
            .collect()
    }
}

impl Default for ReadingFilter {
    fn default() -> Self {
        Self::new()
    }
}
