use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};

use clinic_hours_syntax::rules::ScheduleEntry;

// TimeSlot

/// One hour of the week: a week day numbered from 1 on monday to 7 on
/// sunday, and an hour of the day from 0 to 23.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSlot {
    pub weekday: u8,
    pub hour: u8,
}

impl TimeSlot {
    #[inline]
    pub const fn new(weekday: u8, hour: u8) -> Self {
        Self { weekday, hour }
    }

    /// Reduce a point in time to the slot of the week it belongs to.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use clinic_hours::TimeSlot;
    ///
    /// let sunday_evening = NaiveDate::from_ymd_opt(2024, 6, 2)
    ///     .unwrap()
    ///     .and_hms_opt(21, 45, 0)
    ///     .unwrap();
    ///
    /// assert_eq!(TimeSlot::from_datetime(&sunday_evening), TimeSlot::new(7, 21));
    /// ```
    #[inline]
    pub fn from_datetime<T: Datelike + Timelike>(datetime: &T) -> Self {
        Self {
            weekday: datetime
                .weekday()
                .number_from_monday()
                .try_into()
                .expect("invalid weekday"),
            hour: datetime.hour().try_into().expect("invalid hour"),
        }
    }
}

impl From<NaiveDateTime> for TimeSlot {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeSlot {
    /// Use the local time of the input.
    #[inline]
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime.naive_local())
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.weekday, self.hour)
    }
}

// TimeIndex

/// Names of the clinics open during each hour of the week.
///
/// A name is pushed to a slot once per entry covering it, so a clinic with
/// overlapping entries is listed several times in the shared slots. Names
/// of a slot are kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeIndex {
    slots: BTreeMap<TimeSlot, Vec<Arc<str>>>,
}

impl TimeIndex {
    /// Create an empty index, where no clinic is ever open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a clinic as open for each hour of `hours`, on each day of
    /// `days`. Both ranges are inclusive.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use clinic_hours::{TimeIndex, TimeSlot};
    ///
    /// let name: Arc<str> = Arc::from("Jo Care");
    /// let index = TimeIndex::new().with_opening(1..=5, 11..=14, &name);
    ///
    /// assert_eq!(index.len(), 20);
    /// assert_eq!(index.get(TimeSlot::new(3, 12)), Some(&[name][..]));
    /// assert_eq!(index.get(TimeSlot::new(6, 12)), None);
    /// ```
    pub fn with_opening(
        mut self,
        days: RangeInclusive<u8>,
        hours: RangeInclusive<u8>,
        name: &Arc<str>,
    ) -> Self {
        for weekday in days {
            for hour in hours.clone() {
                self.slots
                    .entry(TimeSlot { weekday, hour })
                    .or_default()
                    .push(name.clone());
            }
        }

        self
    }

    /// Mark a clinic as open during a parsed schedule entry.
    pub fn with_entry(self, entry: &ScheduleEntry, name: &Arc<str>) -> Self {
        self.with_opening(entry.days.days(), entry.hours.hours(), name)
    }

    /// Clinics registered for a slot, or `None` if no clinic is ever open
    /// during this slot.
    pub fn get(&self, slot: TimeSlot) -> Option<&[Arc<str>]> {
        self.slots.get(&slot).map(Vec::as_slice)
    }

    /// Number of slots where at least one clinic is open.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over non-empty slots, in chronological order of the week.
    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, &[Arc<str>])> + '_ {
        self.slots
            .iter()
            .map(|(slot, names)| (*slot, names.as_slice()))
    }
}
