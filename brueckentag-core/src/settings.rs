//! Planner settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Score bridge days and allow spending budget on them. When false,
    /// bridge days are never selected.
    pub use_bridge_days: bool,

    /// Cap on a single break, in weeks (window length rounded up).
    pub max_consecutive_vacation_weeks: u32,

    /// Working stretches longer than this many weeks get broken up.
    pub max_consecutive_work_weeks: u32,

    /// Pre-pick one window per calendar quarter before the greedy pass.
    pub prefer_even_spread: bool,

    /// Anchor one break on the supplied school-holiday periods.
    pub respect_school_holidays: bool,

    /// 0-based months (January = 0) whose working days are never planned.
    pub ignored_months: BTreeSet<u32>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            use_bridge_days: true,
            max_consecutive_vacation_weeks: 2,
            max_consecutive_work_weeks: 8,
            prefer_even_spread: true,
            respect_school_holidays: false,
            ignored_months: BTreeSet::new(),
        }
    }
}

impl PlannerSettings {
    pub fn is_ignored_month(&self, month0: u32) -> bool {
        self.ignored_months.contains(&month0)
    }

    pub fn with_ignored_months(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.ignored_months = months.into_iter().collect();
        self
    }

    pub fn with_bridge_days(mut self, use_bridge_days: bool) -> Self {
        self.use_bridge_days = use_bridge_days;
        self
    }

    pub fn with_even_spread(mut self, prefer_even_spread: bool) -> Self {
        self.prefer_even_spread = prefer_even_spread;
        self
    }

    pub fn with_school_holidays(mut self, respect: bool) -> Self {
        self.respect_school_holidays = respect;
        self
    }

    pub fn with_max_vacation_weeks(mut self, weeks: u32) -> Self {
        self.max_consecutive_vacation_weeks = weeks;
        self
    }

    pub fn with_max_work_weeks(mut self, weeks: u32) -> Self {
        self.max_consecutive_work_weeks = weeks;
        self
    }
}
