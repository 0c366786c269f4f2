//! brueckentag-holidays: the calendar data the planner consumes.
//!
//! German public holidays per federal state, bridge-day derivation,
//! approximate school-holiday periods and the feiertage-api.de JSON format.

pub mod bridge;
pub mod error;
pub mod feiertage;
pub mod germany;
pub mod region;
pub mod school;

pub use bridge::bridge_days_from_holidays;
pub use error::HolidayError;
pub use feiertage::parse_feiertage_json;
pub use germany::{easter_sunday, holidays_for_region, national_holidays, saxony_holidays};
pub use region::Region;
pub use school::school_holidays;
