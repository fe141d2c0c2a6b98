use std::fmt::Display;

use crate::rules::day::{DayRange, Weekday};
use crate::rules::time::HourRange;
use crate::rules::ScheduleEntry;

fn wday_str(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Write an hour of the 24-hour clock with an `am`/`pm` suffix, in a way
/// that parses back to the same value.
pub(crate) fn write_hour(f: &mut std::fmt::Formatter<'_>, hour: u8) -> std::fmt::Result {
    match hour {
        12 => write!(f, "12pm"),
        24 => write!(f, "24am"),
        13.. => write!(f, "{}pm", hour - 12),
        _ => write!(f, "{hour}am"),
    }
}

impl Display for DayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", wday_str(self.start))?;

        if self.start != self.end {
            write!(f, "-{}", wday_str(self.end))?;
        }

        Ok(())
    }
}

impl Display for HourRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_hour(f, self.start)?;
        write!(f, " to ")?;
        write_hour(f, self.end)
    }
}

impl Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.days, self.hours)
    }
}
