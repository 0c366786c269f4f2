//! Approximate school-holiday periods.
//!
//! Only Saxony has built-in periods; the dates are approximations good
//! enough to anchor a break, not an official calendar.

use brueckentag_core::SchoolHoliday;
use chrono::NaiveDate;

use crate::region::Region;

fn period(start: Option<NaiveDate>, end: Option<NaiveDate>, name: &str) -> Option<SchoolHoliday> {
    Some(SchoolHoliday::new(start?, end?, name))
}

pub fn school_holidays(year: i32, region: Region) -> Vec<SchoolHoliday> {
    if region != Region::SN {
        return Vec::new();
    }
    let d = |y: i32, m: u32, day: u32| NaiveDate::from_ymd_opt(y, m, day);
    [
        period(d(year, 2, 10), d(year, 2, 15), "Winterferien"),
        period(d(year, 4, 14), d(year, 4, 21), "Osterferien"),
        period(d(year, 7, 7), d(year, 8, 17), "Sommerferien"),
        period(d(year, 10, 13), d(year, 10, 25), "Herbstferien"),
        period(d(year, 12, 22), d(year + 1, 1, 4), "Weihnachtsferien"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
