//! brueckentag-core: automatic vacation planning over a calendar year.
//!
//! The planner consumes pure data (year, holiday map, bridge days, optional
//! school-holiday periods, settings) and never performs I/O.

pub mod anchors;
pub mod calendar;
pub mod fill;
pub mod planner;
pub mod reservation;
pub mod schedule;
pub mod select;
pub mod settings;
pub mod window;

pub use calendar::{enumerate_days, enumerate_year, is_weekend, DateSet, DayInfo, HolidayMap, SchoolHoliday};
pub use planner::{
    generate_auto_plan, generate_auto_plan_detailed, generate_auto_plan_variants,
    generate_auto_plan_variants_seeded, AutoPlanInput, AutoPlanResult, PlanSummary,
    DEFAULT_VARIANT_COUNT,
};
pub use reservation::Reservation;
pub use schedule::{build_schedule_from_selection, evaluate_recreation_score, HolidayRef, VacationEntry};
pub use settings::PlannerSettings;
pub use window::{Range, Window};
