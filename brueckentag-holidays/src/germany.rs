//! Built-in German public holiday calendars.
//!
//! Saxony is computed in full. Other states fall back to the nationwide
//! holidays; exact regional calendars can be imported as feiertage JSON.

use brueckentag_core::HolidayMap;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::region::Region;

/// Easter Sunday (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Buß- und Bettag: the Wednesday before November 23.
fn repentance_day(year: i32) -> Option<NaiveDate> {
    let mut d = NaiveDate::from_ymd_opt(year, 11, 22)?;
    while d.weekday() != Weekday::Wed {
        d -= Duration::days(1);
    }
    Some(d)
}

fn insert(map: &mut HolidayMap, date: Option<NaiveDate>, name: &str) {
    if let Some(d) = date {
        map.insert(d, name.to_string());
    }
}

/// Holidays observed in every federal state.
pub fn national_holidays(year: i32) -> HolidayMap {
    let mut map = HolidayMap::new();
    let fixed = |m, d| NaiveDate::from_ymd_opt(year, m, d);
    let easter = easter_sunday(year);
    let from_easter = |days: i64| easter.and_then(|e| e.checked_add_signed(Duration::days(days)));

    insert(&mut map, fixed(1, 1), "Neujahr");
    insert(&mut map, from_easter(-2), "Karfreitag");
    insert(&mut map, from_easter(1), "Ostermontag");
    insert(&mut map, fixed(5, 1), "Tag der Arbeit");
    insert(&mut map, from_easter(39), "Christi Himmelfahrt");
    insert(&mut map, from_easter(50), "Pfingstmontag");
    insert(&mut map, fixed(10, 3), "Tag der Deutschen Einheit");
    insert(&mut map, fixed(12, 25), "1. Weihnachtsfeiertag");
    insert(&mut map, fixed(12, 26), "2. Weihnachtsfeiertag");
    map
}

/// Public holidays for Saxony (SN).
pub fn saxony_holidays(year: i32) -> HolidayMap {
    let mut map = national_holidays(year);
    insert(&mut map, NaiveDate::from_ymd_opt(year, 10, 31), "Reformationstag");
    insert(&mut map, repentance_day(year), "Buß- und Bettag");
    map
}

pub fn holidays_for_region(year: i32, region: Region) -> HolidayMap {
    match region {
        Region::SN => saxony_holidays(year),
        _ => national_holidays(year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_dates() {
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(date(2026, 4, 5)));
    }

    #[test]
    fn test_saxony_2025() {
        let map = saxony_holidays(2025);
        assert_eq!(map.len(), 11);
        assert_eq!(map.get(&date(2025, 4, 18)).map(String::as_str), Some("Karfreitag"));
        assert_eq!(map.get(&date(2025, 5, 29)).map(String::as_str), Some("Christi Himmelfahrt"));
        assert_eq!(map.get(&date(2025, 6, 9)).map(String::as_str), Some("Pfingstmontag"));
        assert_eq!(map.get(&date(2025, 10, 31)).map(String::as_str), Some("Reformationstag"));
    }

    #[test]
    fn test_repentance_day_is_wednesday_before_23rd() {
        for year in 2020..2035 {
            let map = saxony_holidays(year);
            let (d, _) = map
                .iter()
                .find(|(_, name)| name.as_str() == "Buß- und Bettag")
                .unwrap();
            assert_eq!(d.weekday(), Weekday::Wed);
            assert_eq!(d.month(), 11);
            assert!((16..23).contains(&d.day()));
        }
        assert_eq!(repentance_day(2025), Some(date(2025, 11, 19)));
    }

    #[test]
    fn test_other_regions_use_national_set() {
        let by = holidays_for_region(2025, Region::BY);
        assert_eq!(by, national_holidays(2025));
        assert!(!by.contains_key(&date(2025, 10, 31)));
        assert_eq!(holidays_for_region(2025, Region::SN).len(), 11);
    }
}
