//! Bridge days: single working days that connect a holiday to a weekend.
//!
//! Rules for a holiday on a weekday:
//! - Tuesday   -> Monday before
//! - Thursday  -> Friday after
//! - Wednesday -> Tuesday and Thursday
//! - Monday    -> previous Friday
//! - Friday    -> next Monday
//!
//! Candidates outside the year, on weekends, or themselves holidays are
//! skipped.

use brueckentag_core::{is_weekend, DateSet, HolidayMap};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

fn bridge_offsets(weekday: Weekday) -> &'static [i64] {
    match weekday {
        Weekday::Tue => &[-1],
        Weekday::Thu => &[1],
        Weekday::Wed => &[-1, 1],
        Weekday::Mon => &[-3],
        Weekday::Fri => &[3],
        Weekday::Sat | Weekday::Sun => &[],
    }
}

pub fn bridge_days_from_holidays(year: i32, holidays: &HolidayMap) -> DateSet {
    let is_candidate = |d: &NaiveDate| d.year() == year && !is_weekend(*d) && !holidays.contains_key(d);

    holidays
        .keys()
        .flat_map(|h| {
            bridge_offsets(h.weekday())
                .iter()
                .filter_map(move |off| h.checked_add_signed(Duration::days(*off)))
        })
        .filter(is_candidate)
        .collect()
}
