use std::ops::RangeInclusive;

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

/// Number of a week day, starting from 1 on monday and ending with 7 on
/// sunday.
#[inline]
pub fn weekday_number(wday: Weekday) -> u8 {
    // Always in 1..=7
    wday.number_from_monday() as u8
}

// DayRange

/// An inclusive range of week days, as in `Mon-Fri` or `Sat`.
///
/// No check is performed on the order of the bounds: a range that ends
/// before it starts contains no day at all.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DayRange {
    pub start: Weekday,
    pub end: Weekday,
}

impl DayRange {
    #[inline]
    pub fn new(start: Weekday, end: Weekday) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn single(wday: Weekday) -> Self {
        Self::new(wday, wday)
    }

    #[inline]
    pub fn start_day(&self) -> u8 {
        weekday_number(self.start)
    }

    #[inline]
    pub fn end_day(&self) -> u8 {
        weekday_number(self.end)
    }

    /// Numbers of the days covered by this range.
    ///
    /// ```
    /// use clinic_hours_syntax::rules::day::{DayRange, Weekday};
    ///
    /// assert_eq!(DayRange::new(Weekday::Mon, Weekday::Fri).days(), 1..=5);
    /// assert_eq!(DayRange::single(Weekday::Sun).days(), 7..=7);
    /// assert!(DayRange::new(Weekday::Sat, Weekday::Mon).days().is_empty());
    /// ```
    #[inline]
    pub fn days(&self) -> RangeInclusive<u8> {
        self.start_day()..=self.end_day()
    }
}
