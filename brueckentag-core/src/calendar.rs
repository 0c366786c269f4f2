//! Calendar primitives: day records, date sets, holiday maps.
//!
//! Dates are `chrono::NaiveDate` everywhere. Equality and ordering on a
//! `NaiveDate` match equality on its `YYYY-MM-DD` form, and serde writes it
//! in that form, so the sets below behave like sets of ISO strings.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Set of calendar dates (selected vacation days, bridge days, ...).
pub type DateSet = BTreeSet<NaiveDate>;

/// Holiday date -> display name.
pub type HolidayMap = BTreeMap<NaiveDate, String>;

/// One calendar day of the planning year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub is_holiday: bool,
    /// `!is_weekend && !is_holiday`
    pub is_working: bool,
}

impl DayInfo {
    /// 0-based month (January = 0).
    pub fn month0(&self) -> u32 {
        self.date.month0()
    }
}

/// A school-holiday period, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolHoliday {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub name: String,
}

impl SchoolHoliday {
    pub fn new(start: NaiveDate, end: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First and last day of `year`, or `None` if chrono cannot represent it.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some((start, end))
}

/// Expand `[start, end]` into ordered day records.
pub fn enumerate_days(start: NaiveDate, end: NaiveDate, holidays: &HolidayMap) -> Vec<DayInfo> {
    std::iter::successors(Some(start), |d| d.succ_opt())
        .take_while(|d| *d <= end)
        .map(|date| {
            let weekend = is_weekend(date);
            let holiday = holidays.contains_key(&date);
            DayInfo {
                date,
                is_weekend: weekend,
                is_holiday: holiday,
                is_working: !weekend && !holiday,
            }
        })
        .collect()
}

/// Day records for a whole year; empty if the year is out of range.
pub fn enumerate_year(year: i32, holidays: &HolidayMap) -> Vec<DayInfo> {
    match year_bounds(year) {
        Some((start, end)) => enumerate_days(start, end, holidays),
        None => Vec::new(),
    }
}
