//! Anchor selection: reserve the culturally typical breaks first.
//!
//! Order of passes:
//! 1) school holidays (optional): window with the largest overlap
//! 2) summer: midpoint in July or August
//! 3) Christmas: last day on or after December 20
//!
//! Then [`pick_max_weeks_occurrence`] makes sure one break reaches the
//! configured maximum length when the budget allows it.

use chrono::Datelike;
use tracing::debug;

use crate::calendar::{DayInfo, SchoolHoliday};
use crate::reservation::Reservation;
use crate::settings::PlannerSettings;
use crate::window::{by_score_desc, overlaps_any, Window};

const JULY: u32 = 6;
const AUGUST: u32 = 7;
const CHRISTMAS_MONTH: u32 = 12;
const CHRISTMAS_FROM_DAY: u32 = 20;

fn eligible(w: &Window, remaining: i32, settings: &PlannerSettings, res: &Reservation) -> bool {
    w.needed <= remaining && w.fits_week_cap(settings) && !overlaps_any(&w.range(), &res.ranges)
}

/// Reserve the first eligible candidate.
fn pick_first<'a>(
    candidates: impl IntoIterator<Item = &'a Window>,
    remaining: &mut i32,
    settings: &PlannerSettings,
    res: &mut Reservation,
) -> Option<&'a Window> {
    for w in candidates {
        if *remaining <= 0 {
            break;
        }
        if !eligible(w, *remaining, settings, res) {
            continue;
        }
        res.reserve(w);
        *remaining -= w.needed;
        return Some(w);
    }
    None
}

/// Largest whole-day overlap between the window and any school period.
pub fn school_overlap_days(w: &Window, days: &[DayInfo], school: &[SchoolHoliday]) -> i64 {
    let ws = days[w.start].date;
    let we = days[w.end].date;
    school
        .iter()
        .map(|sh| (we.min(sh.end) - ws.max(sh.start)).num_days().max(0))
        .max()
        .unwrap_or(0)
}

pub fn pick_anchors(
    days: &[DayInfo],
    windows: &[Window],
    budget: i32,
    settings: &PlannerSettings,
    school: &[SchoolHoliday],
) -> Reservation {
    let mut res = Reservation::new();
    let mut remaining = budget;

    if settings.respect_school_holidays && !school.is_empty() {
        let mut scored: Vec<(&Window, i64)> = windows
            .iter()
            .map(|w| (w, school_overlap_days(w, days, school)))
            .filter(|(_, overlap)| *overlap > 0)
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.score.total_cmp(&a.0.score)));

        if let Some(w) = pick_first(scored.into_iter().map(|(w, _)| w), &mut remaining, settings, &mut res) {
            debug!(start = %days[w.start].date, needed = w.needed, "school-holiday anchor");
        }
    }

    let summer = by_score_desc(
        windows
            .iter()
            .filter(|w| w.mid_month == JULY || w.mid_month == AUGUST),
    );
    if let Some(w) = pick_first(summer, &mut remaining, settings, &mut res) {
        debug!(start = %days[w.start].date, needed = w.needed, "summer anchor");
    }

    let christmas = by_score_desc(windows.iter().filter(|w| {
        let end = days[w.end].date;
        end.month() == CHRISTMAS_MONTH && end.day() >= CHRISTMAS_FROM_DAY
    }));
    if let Some(w) = pick_first(christmas, &mut remaining, settings, &mut res) {
        debug!(start = %days[w.start].date, needed = w.needed, "christmas anchor");
    }

    res
}

/// Reserve the best window whose week length equals the configured cap.
pub fn pick_max_weeks_occurrence(
    days: &[DayInfo],
    windows: &[Window],
    remaining: i32,
    settings: &PlannerSettings,
    pre: &Reservation,
) -> Reservation {
    let mut res = pre.clone();
    let max_weeks = settings.max_consecutive_vacation_weeks;
    if max_weeks == 0 {
        return res;
    }

    let best = by_score_desc(windows.iter().filter(|w| {
        w.length_weeks() == max_weeks
            && w.needed <= remaining
            && !overlaps_any(&w.range(), &pre.ranges)
    }))
    .into_iter()
    .next();

    if let Some(w) = best {
        debug!(start = %days[w.start].date, needed = w.needed, weeks = max_weeks, "max-length break");
        res.reserve(w);
    }
    res
}
