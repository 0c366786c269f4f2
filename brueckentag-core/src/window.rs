//! Candidate windows: enumeration, scoring, ordering.
//!
//! A window is a contiguous day range of at least a week. Its cost is the
//! number of working days inside it; its score is desirability per budget
//! day spent.

use chrono::{Datelike, Weekday};
use rand::Rng;
use std::cmp::Ordering;

use crate::calendar::{DateSet, DayInfo};
use crate::settings::PlannerSettings;

pub const MIN_WINDOW_DAYS: usize = 7;
/// Extra days past the week cap so a window can swallow a trailing weekend.
pub const WINDOW_OVERRUN_DAYS: usize = 2;
pub const WEEKEND_EXTENSION_BONUS: f64 = 0.4;
pub const BRIDGE_DAY_WEIGHT: f64 = 0.8;
pub const SEASON_SUMMER_BONUS: f64 = 0.4;
pub const SEASON_WINTER_BONUS: f64 = 0.1;
pub const SEASON_NEUTRAL_BONUS: f64 = 0.2;

/// Inclusive index range over the day list of an already committed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn overlaps(&self, other: &Range) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// Smaller of the two directional index distances.
    pub fn gap_to(&self, other: &Range) -> usize {
        self.start.abs_diff(other.end).min(other.start.abs_diff(self.end))
    }
}

pub fn overlaps_any(range: &Range, ranges: &[Range]) -> bool {
    ranges.iter().any(|r| range.overlaps(r))
}

/// True if `range` overlaps any reserved range or sits closer than `min_gap`.
pub fn too_close_to_any(range: &Range, ranges: &[Range], min_gap: usize) -> bool {
    ranges
        .iter()
        .any(|r| range.overlaps(r) || range.gap_to(r) < min_gap)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    /// Working days inside the window (budget cost). Always >= 1.
    pub needed: i32,
    pub score: f64,
    /// The working days that would actually be spent.
    pub iso_set: DateSet,
    /// 0-based month of the midpoint day.
    pub mid_month: u32,
    pub quarter: u32,
}

impl Window {
    pub fn range(&self) -> Range {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn len_days(&self) -> usize {
        self.end - self.start + 1
    }

    /// Length in weeks, rounded up.
    pub fn length_weeks(&self) -> u32 {
        self.len_days().div_ceil(7) as u32
    }

    pub fn fits_week_cap(&self, settings: &PlannerSettings) -> bool {
        self.length_weeks() <= settings.max_consecutive_vacation_weeks
    }
}

/// Seasonal weight by 0-based month.
pub fn season_weight(month0: u32) -> f64 {
    match month0 {
        4..=8 => SEASON_SUMMER_BONUS,
        0 | 1 | 11 => SEASON_WINTER_BONUS,
        _ => SEASON_NEUTRAL_BONUS,
    }
}

/// Score of a window before normalizing by its cost.
fn raw_score(slice: &[DayInfo], bridges_for_score: &DateSet) -> f64 {
    let len = slice.len();
    let mut score = match len.cmp(&MIN_WINDOW_DAYS) {
        Ordering::Less => len as f64 * 0.5,
        Ordering::Equal => 8.0,
        Ordering::Greater => 8.0 + (len - MIN_WINDOW_DAYS) as f64 * 0.5,
    };

    if slice[0].date.weekday() == Weekday::Mon {
        score += WEEKEND_EXTENSION_BONUS;
    }
    if slice[len - 1].date.weekday() == Weekday::Fri {
        score += WEEKEND_EXTENSION_BONUS;
    }

    if !bridges_for_score.is_empty() {
        let bridges = slice
            .iter()
            .filter(|d| bridges_for_score.contains(&d.date))
            .count();
        score += bridges as f64 * BRIDGE_DAY_WEIGHT;
    }

    score + season_weight(slice[len / 2].month0())
}

/// Enumerate every admissible window, sorted best first.
///
/// `bridges_for_score` earn the bridge bonus; working days in
/// `excluded_bridges` or in an ignored month disqualify a window.
pub fn enumerate_windows(
    days: &[DayInfo],
    settings: &PlannerSettings,
    bridges_for_score: &DateSet,
    excluded_bridges: &DateSet,
) -> Vec<Window> {
    let max_len = settings.max_consecutive_vacation_weeks as usize * 7 + WINDOW_OVERRUN_DAYS;
    let mut res = Vec::new();

    for i in 0..days.len() {
        for len in MIN_WINDOW_DAYS..=max_len {
            if i + len > days.len() {
                break;
            }
            let slice = &days[i..i + len];

            let needed = slice.iter().filter(|d| d.is_working).count() as i32;
            if needed == 0 {
                continue;
            }

            let disqualified = slice.iter().filter(|d| d.is_working).any(|d| {
                settings.is_ignored_month(d.month0()) || excluded_bridges.contains(&d.date)
            });
            if disqualified {
                continue;
            }

            let mid_month = slice[len / 2].month0();
            if settings.is_ignored_month(mid_month) {
                continue;
            }

            let score = raw_score(slice, bridges_for_score) / needed as f64;
            res.push(Window {
                start: i,
                end: i + len - 1,
                needed,
                score,
                iso_set: slice.iter().filter(|d| d.is_working).map(|d| d.date).collect(),
                mid_month,
                quarter: mid_month / 3,
            });
        }
    }

    sort_windows(&mut res);
    res
}

/// Score desc, then cost asc, then earlier start.
pub fn sort_windows(windows: &mut [Window]) {
    windows.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.needed.cmp(&b.needed))
            .then_with(|| a.start.cmp(&b.start))
    });
}

/// Stable re-sort on score alone; keeps the base tie-break order.
pub(crate) fn by_score_desc<'a>(windows: impl Iterator<Item = &'a Window>) -> Vec<&'a Window> {
    let mut out: Vec<&Window> = windows.collect();
    out.sort_by(|a, b| b.score.total_cmp(&a.score));
    out
}

pub const JITTER_MIN: f64 = 0.9;
pub const JITTER_MAX: f64 = 1.1;

/// Copy of `windows` with each score scaled by a factor in `[0.9, 1.1)`.
///
/// Positions are kept: only phases that rank by score themselves (anchors,
/// max-length pick, quarter spread) see the jittered order; the greedy pass
/// still walks the base order.
pub fn jitter_windows<R: Rng>(windows: &[Window], rng: &mut R) -> Vec<Window> {
    windows
        .iter()
        .map(|w| Window {
            score: w.score * rng.gen_range(JITTER_MIN..JITTER_MAX),
            ..w.clone()
        })
        .collect()
}
