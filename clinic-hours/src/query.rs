use crate::time_index::{TimeIndex, TimeSlot};

/// Names of the clinics open during a slot, sorted alphabetically.
///
/// Sorting is case sensitive, and a clinic registered several times for
/// this slot is listed as many times.
///
/// ```
/// use chrono::NaiveDate;
/// use clinic_hours::{open_clinics, parse_schedule, Clinic, TimeSlot};
///
/// let clinics = [
///     Clinic::new("Mayo Clinic", ["Mon-Fri 7am to 11pm"]),
///     Clinic::new("Atrium Analysts", ["Tue-Fri 2pm to 10pm"]),
/// ];
///
/// let index = parse_schedule(&clinics);
/// assert_eq!(open_clinics(&index, TimeSlot::new(1, 8)), ["Mayo Clinic"]);
///
/// let friday = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// let at = friday.and_hms_opt(16, 30, 0).unwrap();
/// assert_eq!(open_clinics(&index, at), ["Atrium Analysts", "Mayo Clinic"]);
/// ```
pub fn open_clinics(index: &TimeIndex, at: impl Into<TimeSlot>) -> Vec<&str> {
    let mut names: Vec<_> = index
        .get(at.into())
        .unwrap_or_default()
        .iter()
        .map(|name| &**name)
        .collect();

    names.sort_unstable();
    names
}

impl TimeIndex {
    /// Names of the clinics open during a slot, see [`open_clinics`].
    pub fn open_at(&self, at: impl Into<TimeSlot>) -> Vec<&str> {
        open_clinics(self, at)
    }
}
