//! Month-granularity dates for PubMed search windows

use std::fmt;
use std::str::FromStr;

use crate::error::{PubMedError, Result};

/// A year and month, rendered for E-utilities as `YYYY/MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDate {
    year: u32,
    month: u32,
}

impl MonthDate {
    /// Create a new date. `month` is 1-based and must be in `1..=12`.
    pub fn new(year: u32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || year > 9999 {
            return Err(PubMedError::InvalidDate {
                value: format!("{year}/{month:02}"),
            });
        }
        Ok(Self { year, month })
    }

    /// Format as PubMed date string
    pub fn to_pubmed_string(&self) -> String {
        format!("{}/{:02}", self.year, self.month)
    }
}

impl fmt::Display for MonthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pubmed_string())
    }
}

impl TryFrom<(u32, u32)> for MonthDate {
    type Error = PubMedError;

    fn try_from((year, month): (u32, u32)) -> Result<Self> {
        Self::new(year, month)
    }
}

impl FromStr for MonthDate {
    type Err = PubMedError;

    /// Accepts `YYYY/MM` or `YYYY-MM`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PubMedError::InvalidDate {
            value: s.to_string(),
        };

        let (year, month) = s.trim().split_once(['/', '-']).ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }

        let year: u32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

/// Inclusive publication-date window (`mindate`/`maxdate`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub min: MonthDate,
    pub max: MonthDate,
}

impl DateRange {
    pub fn new(min: MonthDate, max: MonthDate) -> Self {
        Self { min, max }
    }
}

impl Default for DateRange {
    /// January 2000 through August 2020
    fn default() -> Self {
        Self::new(
            MonthDate {
                year: 2000,
                month: 1,
            },
            MonthDate {
                year: 2020,
                month: 8,
            },
        )
    }
}
