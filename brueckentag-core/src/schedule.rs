//! Rebuild contiguous off-blocks from a selection and score them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{enumerate_year, DateSet, DayInfo, HolidayMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRef {
    pub date: NaiveDate,
    pub name: String,
}

/// One contiguous off-period (weekends + holidays + selected days) that
/// spends at least one selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationEntry {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration_days: i64,
    pub holidays_used: Vec<HolidayRef>,
}

impl VacationEntry {
    fn from_run(run: &[DayInfo], holidays: &HolidayMap) -> Option<Self> {
        let (first, last) = (run.first()?, run.last()?);
        let holidays_used = run
            .iter()
            .filter_map(|d| {
                holidays.get(&d.date).map(|name| HolidayRef {
                    date: d.date,
                    name: name.clone(),
                })
            })
            .collect();
        Some(Self {
            start: first.date,
            end: last.date,
            duration_days: (last.date - first.date).num_days() + 1,
            holidays_used,
        })
    }
}

/// Group the year into off-runs and keep those containing a selected day.
pub fn build_schedule_from_selection(
    year: i32,
    holidays: &HolidayMap,
    selected: &DateSet,
) -> Vec<VacationEntry> {
    let days = enumerate_year(year, holidays);
    let is_off = |d: &DayInfo| !d.is_working || selected.contains(&d.date);

    days.chunk_by(|a, b| is_off(a) == is_off(b))
        .filter(|run| is_off(&run[0]) && run.iter().any(|d| selected.contains(&d.date)))
        .filter_map(|run| VacationEntry::from_run(run, holidays))
        .collect()
}

/// Length contribution: full credit up to a week, half credit beyond.
fn entry_length_score(len: i64) -> f64 {
    if len <= 7 {
        len as f64
    } else {
        7.0 + (len - 7) as f64 * 0.5
    }
}

/// Aggregate recreation score of a schedule.
///
/// Sum of per-entry length scores plus 0.5 per included holiday (at most
/// two), minus the population variance of entry start months across the
/// twelve months.
pub fn score_schedule(entries: &[VacationEntry]) -> f64 {
    let mut score = 0.0;
    let mut by_month = [0usize; 12];
    for e in entries {
        score += entry_length_score(e.duration_days);
        score += e.holidays_used.len().min(2) as f64 * 0.5;
        by_month[e.start.month0() as usize] += 1;
    }

    let mean = by_month.iter().sum::<usize>() as f64 / 12.0;
    let variance = by_month
        .iter()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / 12.0;
    score - variance
}

pub fn evaluate_recreation_score(year: i32, holidays: &HolidayMap, selected: &DateSet) -> f64 {
    score_schedule(&build_schedule_from_selection(year, holidays, selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_selection_has_no_entries() {
        let mut holidays = HolidayMap::new();
        holidays.insert(date(2025, 12, 25), "1. Weihnachtsfeiertag".into());
        let entries = build_schedule_from_selection(2025, &holidays, &DateSet::new());
        assert!(entries.is_empty());
        assert_eq!(evaluate_recreation_score(2025, &holidays, &DateSet::new()), 0.0);
    }

    #[test]
    fn test_entry_spans_weekends_and_holidays() {
        let mut holidays = HolidayMap::new();
        holidays.insert(date(2025, 5, 29), "Christi Himmelfahrt".into());
        // Friday bridge day.
        let selected: DateSet = [date(2025, 5, 30)].into_iter().collect();

        let entries = build_schedule_from_selection(2025, &holidays, &selected);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.start, date(2025, 5, 29));
        assert_eq!(e.end, date(2025, 6, 1));
        assert_eq!(e.duration_days, 4);
        assert_eq!(e.holidays_used.len(), 1);
        assert_eq!(e.holidays_used[0].name, "Christi Himmelfahrt");
    }

    #[test]
    fn test_entry_at_year_end() {
        // Wed 2025-12-31 with the weekend before it not adjacent.
        let selected: DateSet = [date(2025, 12, 31)].into_iter().collect();
        let entries = build_schedule_from_selection(2025, &HolidayMap::new(), &selected);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start, date(2025, 12, 31));
        assert_eq!(entries[0].duration_days, 1);
    }

    #[test]
    fn test_score_formula() {
        let entries = vec![
            VacationEntry {
                start: date(2025, 7, 5),
                end: date(2025, 7, 20),
                duration_days: 16,
                holidays_used: vec![],
            },
            VacationEntry {
                start: date(2025, 12, 20),
                end: date(2025, 12, 28),
                duration_days: 9,
                holidays_used: vec![
                    HolidayRef { date: date(2025, 12, 25), name: "a".into() },
                    HolidayRef { date: date(2025, 12, 26), name: "b".into() },
                    HolidayRef { date: date(2025, 12, 27), name: "c".into() },
                ],
            },
        ];
        // 7 + 9*0.5 = 11.5; 7 + 2*0.5 + 1.0 = 9.0
        // months: two buckets with 1, mean 2/12, variance = (2*(1-m)^2 + 10*m^2)/12
        let m = 2.0 / 12.0;
        let variance = (2.0 * (1.0 - m) * (1.0 - m) + 10.0 * m * m) / 12.0;
        let expected = 11.5 + 9.0 - variance;
        assert!((score_schedule(&entries) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_entry_serializes_iso_dates() {
        let e = VacationEntry {
            start: date(2025, 4, 18),
            end: date(2025, 4, 27),
            duration_days: 10,
            holidays_used: vec![],
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"start\":\"2025-04-18\""));
        assert!(json.contains("\"duration_days\":10"));
    }
}
