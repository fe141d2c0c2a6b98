#![doc = include_str!("../../README.md")]

pub mod clinic;
pub mod compiler;
pub mod error;
pub mod query;
pub mod time_index;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::clinic::Clinic;
pub use crate::compiler::parse_schedule;
pub use crate::error::InvalidListingLine;
pub use crate::query::open_clinics;
pub use crate::time_index::{TimeIndex, TimeSlot};
pub use clinic_hours_syntax::rules::ScheduleEntry;
pub use clinic_hours_syntax::{parse_day_range, parse_hour_range};

pub use clinic_hours_syntax::error::Error as ParserError;
