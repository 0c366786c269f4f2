//! Post-processing of a selection: break up long working stretches, then
//! spend whatever budget is left on single days.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::calendar::{DateSet, DayInfo};
use crate::settings::PlannerSettings;

/// A gap day is searched within this many days of the run midpoint.
pub const GAP_SEARCH_RADIUS: usize = 2;

const ADJACENT_OFF_BONUS: f64 = 2.0;
const BRIDGE_BONUS: f64 = 1.5;
const MON_FRI_BONUS: f64 = 0.8;
const SEASON_BONUS: f64 = 0.3;
const OFF_SEASON_BONUS: f64 = 0.1;

fn plannable(d: &DayInfo, settings: &PlannerSettings, excluded_bridges: &DateSet) -> bool {
    d.is_working && !settings.is_ignored_month(d.month0()) && !excluded_bridges.contains(&d.date)
}

/// Weekends, holidays and everything already selected.
fn off_days(days: &[DayInfo], selected: &DateSet) -> DateSet {
    days.iter()
        .filter(|d| !d.is_working || selected.contains(&d.date))
        .map(|d| d.date)
        .collect()
}

/// Insert single days into working runs longer than
/// `max_consecutive_work_weeks * 7` days.
///
/// A run is split by one day near its middle. Halves of a split run can
/// still be too long, so passes repeat until nothing is inserted or the
/// budget is gone. On a real calendar weekends cap runs at five working
/// days, so with a cap of a week or more this is a no-op; the repeat only
/// matters for day lists without weekends.
pub fn fill_long_work_gaps(
    days: &[DayInfo],
    current: &DateSet,
    budget: i32,
    settings: &PlannerSettings,
    excluded_bridges: &DateSet,
) -> DateSet {
    let mut out = current.clone();
    let max_work = settings.max_consecutive_work_weeks as usize * 7;
    if max_work == 0 {
        return out;
    }
    let mut remaining = budget - out.len() as i32;
    let mut off = off_days(days, &out);

    while remaining > 0 {
        let mut inserted = 0;
        let mut i = 0;
        while i < days.len() && remaining > 0 {
            while i < days.len() && off.contains(&days[i].date) {
                i += 1;
            }
            let start = i;
            while i < days.len() && !off.contains(&days[i].date) && days[i].is_working {
                i += 1;
            }
            let run_len = i - start;
            if run_len <= max_work {
                continue;
            }

            let end = i - 1;
            let mid = start + run_len / 2;
            let lo = start.max(mid.saturating_sub(GAP_SEARCH_RADIUS));
            let hi = end.min(mid + GAP_SEARCH_RADIUS);
            let candidate = days[lo..=hi]
                .iter()
                .find(|d| plannable(d, settings, excluded_bridges));
            if let Some(d) = candidate {
                if out.insert(d.date) {
                    debug!(date = %d.date, run_len, "work-gap day");
                    off.insert(d.date);
                    remaining -= 1;
                    inserted += 1;
                }
            }
        }
        if inserted == 0 {
            break;
        }
    }
    out
}

fn remainder_score(days: &[DayInfo], i: usize, off: &DateSet, bridge_bonus: &DateSet) -> f64 {
    let d = &days[i];
    let is_off = |idx: Option<usize>| {
        idx.and_then(|j| days.get(j))
            .is_some_and(|x| off.contains(&x.date))
    };

    let mut score = 0.0;
    if is_off(i.checked_sub(1)) {
        score += ADJACENT_OFF_BONUS;
    }
    if is_off(Some(i + 1)) {
        score += ADJACENT_OFF_BONUS;
    }
    if bridge_bonus.contains(&d.date) {
        score += BRIDGE_BONUS;
    }
    if matches!(d.date.weekday(), Weekday::Mon | Weekday::Fri) {
        score += MON_FRI_BONUS;
    }
    score += if (4..=8).contains(&d.month0()) {
        SEASON_BONUS
    } else {
        OFF_SEASON_BONUS
    };
    score
}

/// Spend up to `remaining` days on single working days, preferring ones that
/// extend an existing off-block or sit on a bridge day.
pub fn fill_remaining(
    days: &[DayInfo],
    bridge_bonus: &DateSet,
    current: &DateSet,
    remaining: i32,
    settings: &PlannerSettings,
    excluded_bridges: &DateSet,
) -> DateSet {
    let mut out = current.clone();
    if remaining <= 0 {
        return out;
    }

    let off = off_days(days, &out);
    let mut candidates: Vec<(NaiveDate, f64)> = days
        .iter()
        .enumerate()
        .filter(|(_, d)| !out.contains(&d.date) && plannable(d, settings, excluded_bridges))
        .map(|(i, d)| (d.date, remainder_score(days, i, &off, bridge_bonus)))
        .collect();
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    let take = remaining as usize;
    for (date, score) in candidates.into_iter().take(take) {
        debug!(%date, score, "remainder day");
        out.insert(date);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{enumerate_year, HolidayMap};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Holidays on every weekday except the listed range, so the only
    /// working stretch is the one under test.
    fn year_with_single_run(from: NaiveDate, to: NaiveDate) -> Vec<DayInfo> {
        let mut holidays = HolidayMap::new();
        for d in enumerate_year(2025, &HolidayMap::new()) {
            if d.is_working && (d.date < from || d.date > to) {
                holidays.insert(d.date, "closed".into());
            }
        }
        enumerate_year(2025, &holidays)
    }

    #[test]
    fn test_no_gap_fill_when_runs_are_short() {
        let days = enumerate_year(2025, &HolidayMap::new());
        // Weekends already split every run into 5 working days.
        let out = fill_long_work_gaps(&days, &DateSet::new(), 10, &PlannerSettings::default(), &DateSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_long_run_is_split_near_midpoint() {
        // Monday 2025-03-03 .. Friday 2025-03-14: two weeks of workdays,
        // weekend in between. Treat that weekend as a single long run by
        // using a one-week threshold against an all-working synthetic year.
        let mut days = year_with_single_run(date(2025, 3, 3), date(2025, 3, 14));
        for d in days.iter_mut() {
            if d.is_weekend && d.date > date(2025, 3, 3) && d.date < date(2025, 3, 14) {
                d.is_weekend = false;
                d.is_working = true;
            }
        }
        let settings = PlannerSettings::default().with_max_work_weeks(1);

        let out = fill_long_work_gaps(&days, &DateSet::new(), 5, &settings, &DateSet::new());
        // 12-day run, midpoint index 6 -> 2025-03-09; first plannable day in
        // the +-2 window starting at 03-07.
        assert_eq!(out.len(), 1);
        assert!(out.contains(&date(2025, 3, 7)));
    }

    #[test]
    fn test_gap_fill_repeats_until_runs_fit() {
        let mut days = year_with_single_run(date(2025, 3, 3), date(2025, 3, 28));
        for d in days.iter_mut() {
            if d.is_weekend && d.date > date(2025, 3, 3) && d.date < date(2025, 3, 28) {
                d.is_weekend = false;
                d.is_working = true;
            }
        }
        let settings = PlannerSettings::default().with_max_work_weeks(1);

        let out = fill_long_work_gaps(&days, &DateSet::new(), 10, &settings, &DateSet::new());
        // 26-day run needs more than one split to get below 8 days.
        assert!(out.len() >= 3);
        let mut run = 0;
        for d in &days {
            if d.is_working && !out.contains(&d.date) {
                run += 1;
                assert!(run <= 7);
            } else {
                run = 0;
            }
        }
    }

    #[test]
    fn test_gap_fill_stops_at_budget() {
        let mut days = year_with_single_run(date(2025, 3, 3), date(2025, 3, 28));
        for d in days.iter_mut() {
            if d.is_weekend && d.date > date(2025, 3, 3) && d.date < date(2025, 3, 28) {
                d.is_weekend = false;
                d.is_working = true;
            }
        }
        let settings = PlannerSettings::default().with_max_work_weeks(1);
        let out = fill_long_work_gaps(&days, &DateSet::new(), 1, &settings, &DateSet::new());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_remainder_prefers_adjacent_and_bridge_days() {
        let mut holidays = HolidayMap::new();
        // Thursday holiday; Friday 05-30 is the bridge day.
        holidays.insert(date(2025, 5, 29), "Christi Himmelfahrt".into());
        let days = enumerate_year(2025, &holidays);
        let bridges: DateSet = [date(2025, 5, 30)].into_iter().collect();

        let out = fill_remaining(&days, &bridges, &DateSet::new(), 1, &PlannerSettings::default(), &DateSet::new());
        assert_eq!(out.len(), 1);
        assert!(out.contains(&date(2025, 5, 30)));
    }

    #[test]
    fn test_remainder_skips_ignored_and_excluded() {
        let days = enumerate_year(2025, &HolidayMap::new());
        let settings = PlannerSettings::default().with_ignored_months(0..6);
        let excluded: DateSet = [date(2025, 7, 4)].into_iter().collect();

        let out = fill_remaining(&days, &DateSet::new(), &DateSet::new(), 20, &settings, &excluded);
        assert_eq!(out.len(), 20);
        assert!(out.iter().all(|d| d.month0() >= 6));
        assert!(!out.contains(&date(2025, 7, 4)));
    }

    #[test]
    fn test_remainder_noop_without_budget() {
        let days = enumerate_year(2025, &HolidayMap::new());
        let current: DateSet = [date(2025, 2, 3)].into_iter().collect();
        let out = fill_remaining(&days, &DateSet::new(), &current, 0, &PlannerSettings::default(), &DateSet::new());
        assert_eq!(out, current);
    }
}
