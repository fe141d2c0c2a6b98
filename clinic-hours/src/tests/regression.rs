use clinic_hours_syntax::error::Error;

use crate::{open_clinics, parse_schedule, Clinic, ScheduleEntry, TimeSlot};

#[test]
fn s000_twelve_am_is_read_as_noon() -> Result<(), Error> {
    let entry: ScheduleEntry = "Mon 12am to 1pm".parse()?;
    assert_eq!(entry.hours.hours(), 12..=13);

    let index = parse_schedule(&[Clinic::new("Night Owl", ["Mon 12am to 1pm"])]);
    assert!(open_clinics(&index, TimeSlot::new(1, 0)).is_empty());
    assert_eq!(open_clinics(&index, TimeSlot::new(1, 12)), ["Night Owl"]);
    assert_eq!(open_clinics(&index, TimeSlot::new(1, 13)), ["Night Owl"]);
    Ok(())
}

#[test]
fn s001_reversed_day_range_is_never_open() -> Result<(), Error> {
    let entry: ScheduleEntry = "Sat-Mon 9am to 5pm".parse()?;
    assert!(entry.days.days().is_empty());

    let index = parse_schedule(&[Clinic::new("Weekender", ["Sat-Mon 9am to 5pm"])]);
    assert!(index.is_empty());
    Ok(())
}

#[test]
fn s002_single_hour() {
    let index = parse_schedule(&[Clinic::new("Lunch Break", ["Wed 12pm to 12pm"])]);
    assert_eq!(index.len(), 1);
    assert_eq!(open_clinics(&index, TimeSlot::new(3, 12)), ["Lunch Break"]);
}

#[test]
fn s003_hours_past_the_end_of_day() {
    // "13pm" is read as hour 25, which can't be queried
    let index = parse_schedule(&[Clinic::new("Late", ["Mon 9pm to 13pm"])]);
    assert_eq!(index.len(), 5);
    assert_eq!(open_clinics(&index, TimeSlot::new(1, 23)), ["Late"]);
    assert!(open_clinics(&index, TimeSlot::new(2, 0)).is_empty());
}
