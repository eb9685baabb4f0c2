use std::fmt;

use validator::Validate;

use crate::error::{Result, WeatherError};

/// A report period: a whole year, or a single month of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct Period {
    #[validate(range(min = 1, max = 9999))]
    pub year: i32,

    #[validate(range(min = 1, max = 12))]
    pub month: Option<u32>,
}

impl Period {
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(month) => write!(f, "{}/{:02}", self.year, month),
            None => write!(f, "{}", self.year),
        }
    }
}

/// Parse a `YEAR` command-line token.
pub fn parse_year(token: &str) -> Result<i32> {
    let invalid = || WeatherError::InvalidYear {
        token: token.to_string(),
    };

    let year = token.trim().parse::<i32>().map_err(|_| invalid())?;
    Period::year(year).validate().map_err(|_| invalid())?;

    Ok(year)
}

/// Parse a `YEAR/MONTH` command-line token such as `2006/3` or `2006/03`.
pub fn parse_year_month(token: &str) -> Result<(i32, u32)> {
    let invalid = |reason: &str| WeatherError::InvalidYearMonth {
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let (raw_year, raw_month) = token
        .trim()
        .split_once('/')
        .ok_or_else(|| invalid("expected YEAR/MONTH, e.g. 2006/3"))?;

    let year = raw_year
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid("year is not a number"))?;
    let month = raw_month
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid("month is not a number"))?;

    Period::month(year, month).validate().map_err(|errors| {
        if errors.field_errors().contains_key("month") {
            invalid("month must be between 1 and 12")
        } else {
            invalid("year must be between 1 and 9999")
        }
    })?;

    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2006").unwrap(), 2006);
        assert_eq!(parse_year(" 2011 ").unwrap(), 2011);
        assert!(parse_year("20o6").is_err());
        assert!(parse_year("0").is_err());
        assert!(parse_year("10000").is_err());
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(parse_year_month("2006/3").unwrap(), (2006, 3));
        assert_eq!(parse_year_month("2006/03").unwrap(), (2006, 3));
        assert_eq!(parse_year_month("2006/12").unwrap(), (2006, 12));
    }

    #[test]
    fn test_parse_year_month_reports_reason() {
        let err = parse_year_month("2006/13").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid YEAR/MONTH '2006/13': month must be between 1 and 12"
        );

        let err = parse_year_month("2006").unwrap_err();
        assert!(err.to_string().contains("expected YEAR/MONTH"));

        let err = parse_year_month("abcd/2").unwrap_err();
        assert!(err.to_string().contains("year is not a number"));

        let err = parse_year_month("0/2").unwrap_err();
        assert!(err.to_string().contains("year must be between 1 and 9999"));

        assert!(parse_year_month("2006/0").is_err());
        assert!(parse_year_month("2006/3/1").is_err());
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::year(2006).to_string(), "2006");
        assert_eq!(Period::month(2006, 3).to_string(), "2006/03");
    }
}
