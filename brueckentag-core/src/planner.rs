//! Automatic vacation planner: the public entry points.
//!
//! Pipeline (each phase returns a new selection, the date set only grows):
//! 1) enumerate + score windows once
//! 2) anchors (school holidays, summer, Christmas)
//! 3) one break of maximum allowed length
//! 4) greedy selection with spacing / per-quarter spread
//! 5) split long working stretches
//! 6) spend the remainder on single days

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::anchors::{pick_anchors, pick_max_weeks_occurrence};
use crate::calendar::{enumerate_year, DateSet, DayInfo, HolidayMap, SchoolHoliday};
use crate::fill::{fill_long_work_gaps, fill_remaining};
use crate::schedule::{build_schedule_from_selection, score_schedule, VacationEntry};
use crate::select::select_windows;
use crate::settings::PlannerSettings;
use crate::window::{enumerate_windows, jitter_windows, overlaps_any, Window};

pub const DEFAULT_VARIANT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoPlanInput {
    pub year: i32,
    /// Vacation days available to assign.
    pub budget: i32,
    pub holidays: HolidayMap,
    /// Full bridge-day set; ignored for scoring when bridge days are off.
    pub bridge_days: DateSet,
    #[serde(default)]
    pub settings: PlannerSettings,
    #[serde(default)]
    pub school_holidays: Vec<SchoolHoliday>,
}

impl AutoPlanInput {
    pub fn new(year: i32, budget: i32, holidays: HolidayMap, bridge_days: DateSet) -> Self {
        Self {
            year,
            budget,
            holidays,
            bridge_days,
            settings: PlannerSettings::default(),
            school_holidays: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: PlannerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_school_holidays(mut self, school_holidays: Vec<SchoolHoliday>) -> Self {
        self.school_holidays = school_holidays;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub used_vacation_days: usize,
    pub available_vacation_days: i32,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoPlanResult {
    pub days: DateSet,
    pub schedule: Vec<VacationEntry>,
    pub summary: PlanSummary,
}

/// Inputs derived once per plan and shared by every run.
struct Prepared {
    days: Vec<DayInfo>,
    windows: Vec<Window>,
    /// Bridge days that earn score (empty when bridge days are off).
    bridges_for_score: DateSet,
    /// Bridge days that must never be spent (empty when bridge days are on).
    excluded_bridges: DateSet,
}

impl Prepared {
    fn new(input: &AutoPlanInput) -> Self {
        let days = enumerate_year(input.year, &input.holidays);
        let (bridges_for_score, excluded_bridges) = if input.settings.use_bridge_days {
            (input.bridge_days.clone(), DateSet::new())
        } else {
            (DateSet::new(), input.bridge_days.clone())
        };
        let windows = enumerate_windows(
            &days,
            &input.settings,
            &bridges_for_score,
            &excluded_bridges,
        );
        debug!(year = input.year, windows = windows.len(), "enumerated windows");
        Self {
            days,
            windows,
            bridges_for_score,
            excluded_bridges,
        }
    }

    fn run(&self, input: &AutoPlanInput, windows: &[Window], settings: &PlannerSettings) -> DateSet {
        let budget = input.budget;
        if budget <= 0 {
            return DateSet::new();
        }
        let days = &self.days;

        let anchored = pick_anchors(days, windows, budget, settings, &input.school_holidays);
        let with_max = pick_max_weeks_occurrence(
            days,
            windows,
            budget - anchored.used(),
            settings,
            &anchored,
        );
        debug!(anchored = anchored.used(), reserved = with_max.used(), "anchors done");

        let open: Vec<&Window> = windows
            .iter()
            .filter(|w| !overlaps_any(&w.range(), &with_max.ranges))
            .collect();
        let chosen = select_windows(&open, budget - with_max.used(), settings, &with_max);
        debug!(selected = chosen.used(), "window selection done");

        let completed = fill_long_work_gaps(
            days,
            &chosen.selected,
            budget,
            settings,
            &self.excluded_bridges,
        );
        let remaining = budget - completed.len() as i32;
        fill_remaining(
            days,
            &self.bridges_for_score,
            &completed,
            remaining,
            settings,
            &self.excluded_bridges,
        )
    }
}

fn detail(input: &AutoPlanInput, days: DateSet) -> AutoPlanResult {
    let schedule = build_schedule_from_selection(input.year, &input.holidays, &days);
    let score = score_schedule(&schedule);
    AutoPlanResult {
        summary: PlanSummary {
            used_vacation_days: days.len(),
            available_vacation_days: input.budget,
            score,
        },
        days,
        schedule,
    }
}

/// Selected vacation days for the year. Deterministic for identical input.
pub fn generate_auto_plan(input: &AutoPlanInput) -> DateSet {
    if input.budget <= 0 {
        return DateSet::new();
    }
    let prepared = Prepared::new(input);
    let days = prepared.run(input, &prepared.windows, &input.settings);
    info!(
        year = input.year,
        budget = input.budget,
        used = days.len(),
        "auto plan generated"
    );
    days
}

/// Selected days plus the resulting schedule and its score.
pub fn generate_auto_plan_detailed(input: &AutoPlanInput) -> AutoPlanResult {
    detail(input, generate_auto_plan(input))
}

/// `count` alternative plans, best score first.
///
/// Every run scales window scores by a random factor in `[0.9, 1.1)` drawn
/// from `rng`; even runs keep the per-quarter spread (if enabled), odd runs
/// drop it.
pub fn generate_auto_plan_variants<R: Rng>(
    input: &AutoPlanInput,
    count: usize,
    rng: &mut R,
) -> Vec<AutoPlanResult> {
    if count == 0 {
        return Vec::new();
    }
    let prepared = Prepared::new(input);

    let mut variants: Vec<AutoPlanResult> = (0..count)
        .map(|i| {
            let jittered = jitter_windows(&prepared.windows, rng);
            let settings = PlannerSettings {
                prefer_even_spread: input.settings.prefer_even_spread && i % 2 == 0,
                ..input.settings.clone()
            };
            detail(input, prepared.run(input, &jittered, &settings))
        })
        .collect();

    variants.sort_by(|a, b| b.summary.score.total_cmp(&a.summary.score));
    info!(year = input.year, count, "auto plan variants generated");
    variants
}

/// [`generate_auto_plan_variants`] with a seeded generator.
pub fn generate_auto_plan_variants_seeded(
    input: &AutoPlanInput,
    count: usize,
    seed: u64,
) -> Vec<AutoPlanResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_auto_plan_variants(input, count, &mut rng)
}
