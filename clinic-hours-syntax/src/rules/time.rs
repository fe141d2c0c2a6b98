use std::ops::RangeInclusive;

// HourRange

/// An inclusive range of hours of the day on the 24-hour clock.
///
/// The parser only builds ranges where `start <= end`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct HourRange {
    pub start: u8,
    pub end: u8,
}

impl HourRange {
    #[inline]
    pub fn hours(&self) -> RangeInclusive<u8> {
        self.start..=self.end
    }
}
