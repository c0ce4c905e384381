//! Calendar windowing: month grids for the heatmap and the list of months an
//! event window spans. All values are civil dates, no time zone is modelled.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::modules::scheduling::core::errors::CoreError;

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// A year-month identifier, written `YYYY-MM`, with the year in 0000-9999.
///
/// Backed by the first day of the month so ordering and arithmetic come from
/// the calendar itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if !YEAR_RANGE.contains(&year) {
            return Err(CoreError::InvalidArgument(format!(
                "year {year} is outside 0000-9999"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidArgument(format!("month {month} is not 01-12")))
    }

    /// The month containing `date`. Fails for dates outside years 0000-9999.
    pub fn of(date: NaiveDate) -> Result<Self, CoreError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        // Years stay within 0000-9999, far inside chrono's range
        self.0 + Months::new(1) - Days::new(1)
    }

    /// The following month, or `None` after 9999-12.
    pub fn succ(&self) -> Option<Self> {
        Self::of(self.0.checked_add_months(Months::new(1))?).ok()
    }

    /// The preceding month, or `None` before 0000-01.
    pub fn pred(&self) -> Option<Self> {
        Self::of(self.0.checked_sub_months(Months::new(1))?).ok()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidArgument(format!("'{value}' is not a YYYY-MM month"));
        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Parse a `YYYY-MM-DD` calendar date: four-digit year, two-digit month and
/// day, nothing else.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    let invalid = || CoreError::InvalidArgument(format!("'{value}' is not a YYYY-MM-DD date"));
    let mut parts = value.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4
        || month.len() != 2
        || day.len() != 2
        || ![year, month, day].into_iter().all(all_digits)
    {
        return Err(invalid());
    }
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    let day = day.parse::<u32>().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Every day shown for `month` in a Monday-first calendar: from the Monday on
/// or before the 1st through the Sunday on or after the last day. Days of the
/// neighbouring months are kept; the caller decides how to show them.
pub fn enumerate_month_grid(month: YearMonth) -> Vec<NaiveDate> {
    let first = month.first_day();
    let last = month.last_day();
    let start = first - Days::new(u64::from(first.weekday().num_days_from_monday()));
    let end = last + Days::new(u64::from(6 - last.weekday().num_days_from_monday()));

    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Months from `start`'s month through `end`'s month, inclusive.
///
/// Fails with `InvalidArgument` when `start` is after `end` or either date
/// lies outside years 0000-9999.
pub fn enumerate_months_in_range(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<YearMonth>, CoreError> {
    if start > end {
        return Err(CoreError::InvalidArgument(format!(
            "range start {start} is after end {end}"
        )));
    }

    let last = YearMonth::of(end)?;
    let mut cursor = YearMonth::of(start)?;
    let mut months = vec![cursor];
    while let Some(next) = cursor.succ().filter(|next| *next <= last) {
        months.push(next);
        cursor = next;
    }
    Ok(months)
}
