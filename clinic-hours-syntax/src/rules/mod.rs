pub mod day;
pub mod time;

use std::str::FromStr;

use crate::error::Error;

// ScheduleEntry

/// A single opening window of a clinic: a range of week days, each open
/// during the same range of hours.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub days: day::DayRange,
    pub hours: time::HourRange,
}

impl FromStr for ScheduleEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
