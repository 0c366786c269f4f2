//! General window selection: spend the budget left after the anchors.

use tracing::debug;

use crate::reservation::Reservation;
use crate::settings::PlannerSettings;
use crate::window::{too_close_to_any, Window};

/// Minimum distance (in days) between two breaks.
pub const MIN_GAP_DAYS: usize = 21;

/// Greedy selection over `windows` (best first), keeping breaks spread.
///
/// With `prefer_even_spread` one window per calendar quarter is tried first:
/// the top-scoring one that fits the cap and the budget. If it sits too close
/// to an existing break the quarter is skipped. The greedy pass then walks the
/// whole list.
pub fn select_windows(
    windows: &[&Window],
    budget: i32,
    settings: &PlannerSettings,
    pre: &Reservation,
) -> Reservation {
    let mut res = pre.clone();
    let mut remaining = budget;

    if settings.prefer_even_spread {
        for q in 0..4 {
            if remaining <= 0 {
                break;
            }
            let candidate = windows
                .iter()
                .filter(|w| w.quarter == q && w.fits_week_cap(settings) && w.needed <= remaining)
                .fold(None::<&Window>, |best, w| match best {
                    Some(b) if b.score >= w.score => Some(b),
                    _ => Some(w),
                });
            let Some(w) = candidate else { continue };
            if too_close_to_any(&w.range(), &res.ranges, MIN_GAP_DAYS) {
                continue;
            }
            debug!(quarter = q, start = w.start, needed = w.needed, "even-spread pick");
            res.reserve(w);
            remaining -= w.needed;
        }
    }

    for w in windows {
        if remaining <= 0 {
            break;
        }
        if w.needed > remaining || !w.fits_week_cap(settings) {
            continue;
        }
        if too_close_to_any(&w.range(), &res.ranges, MIN_GAP_DAYS) {
            continue;
        }
        debug!(start = w.start, needed = w.needed, score = w.score, "greedy pick");
        res.reserve(w);
        remaining -= w.needed;
    }

    res
}
