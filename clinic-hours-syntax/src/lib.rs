#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod rules;

mod display;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use parser::{parse, parse_day_range, parse_hour_range};
pub use rules::day::{DayRange, Weekday};
pub use rules::time::HourRange;
pub use rules::ScheduleEntry;
