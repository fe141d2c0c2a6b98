//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.
#[cfg(test)]
mod tests;

use arbitrary::Arbitrary;
use chrono::DateTime;

use std::fmt::Debug;

use clinic_hours::{open_clinics, parse_schedule, Clinic, ScheduleEntry, TimeSlot};

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub date_secs: i64,
    pub clinics: Vec<(String, Vec<String>)>,
}

impl Data {
    fn clinics(&self) -> Vec<Clinic> {
        self.clinics
            .iter()
            .map(|(name, opening_hours)| Clinic::new(name.as_str(), opening_hours))
            .collect()
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = DateTime::from_timestamp(self.date_secs, 0) {
            debug.field("date", &date.naive_utc());
        }

        debug.field("clinics", &self.clinics);
        debug.finish()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_index(data: Data) -> bool {
    let Some(date) = DateTime::from_timestamp(data.date_secs, 0) else {
        return false;
    };

    let clinics = data.clinics();
    let mut any_valid = false;

    // Displayed entries must parse back to the same entry.
    for raw in clinics.iter().flat_map(|clinic| &clinic.opening_hours) {
        let Ok(entry) = raw.parse::<ScheduleEntry>() else {
            continue;
        };

        any_valid = true;
        assert!(entry.hours.start <= entry.hours.end);

        let displayed = entry.to_string();
        let reparsed: ScheduleEntry = displayed.parse().unwrap_or_else(|err| {
            eprintln!("[ERR] Initial entry: {raw}");
            eprintln!("[ERR] Invalid displayed entry: {displayed}");
            panic!("{err}")
        });

        assert_eq!(entry, reparsed);
    }

    if !any_valid {
        return false;
    }

    let index = parse_schedule(&clinics);
    let slot = TimeSlot::from(date.naive_utc());
    let open = open_clinics(&index, slot);

    // Output is sorted and only contains known clinics.
    assert!(open.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(open.iter().all(|name| clinics.iter().any(|c| &*c.name == *name)));

    // Compiling twice gives the same index.
    assert_eq!(index, parse_schedule(&clinics));
    true
}
