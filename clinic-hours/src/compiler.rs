use clinic_hours_syntax::rules::ScheduleEntry;

use crate::clinic::Clinic;
use crate::time_index::TimeIndex;

/// Compile opening hours of all input clinics into a single index.
///
/// Entries that can't be parsed are skipped and do not prevent other
/// entries of the same clinic from being indexed.
///
/// ```
/// use clinic_hours::{parse_schedule, Clinic, TimeSlot};
///
/// let clinics = [Clinic::new(
///     "Angios R Us",
///     ["Mon-Fri 9am to 5pm", "Sat 11am to 2am", "Sat 10am to 2pm"],
/// )];
///
/// let index = parse_schedule(&clinics);
/// assert!(index.get(TimeSlot::new(6, 12)).is_some());
/// assert!(index.get(TimeSlot::new(6, 20)).is_none());
/// ```
pub fn parse_schedule<'c>(clinics: impl IntoIterator<Item = &'c Clinic>) -> TimeIndex {
    clinics
        .into_iter()
        .flat_map(|clinic| {
            clinic
                .opening_hours
                .iter()
                .map(move |raw| (clinic, raw, raw.parse::<ScheduleEntry>()))
        })
        .fold(TimeIndex::new(), |index, (clinic, _raw, entry)| match entry {
            Ok(entry) => index.with_entry(&entry, &clinic.name),
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!(
                    "Skipping opening hours `{_raw}` of clinic `{}`: {_err}",
                    clinic.name,
                );

                index
            }
        })
}
