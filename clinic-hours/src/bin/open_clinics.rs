use std::env;
use std::fs;

use chrono::{Local, NaiveDateTime};

use clinic_hours::{parse_schedule, Clinic, TimeSlot};

fn main() {
    let mut args = env::args().skip(1);
    let path = args.next().expect("Usage: ./open-clinics <LISTING> [YYYY-MM-DD HH:MM]");

    let datetime = match args.next() {
        Some(raw) => NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M")
            .unwrap_or_else(|err| panic!("invalid date `{raw}`: {err}")),
        None => Local::now().naive_local(),
    };

    let listing = fs::read_to_string(&path).expect("could not open listing");

    let clinics = match Clinic::parse_listing(&listing) {
        Ok(clinics) => clinics,
        Err(err) => panic!("{err}"),
    };

    let index = parse_schedule(&clinics);
    let slot = TimeSlot::from(datetime);
    println!(" - listing: {path} ({} clinics)", clinics.len());
    println!(" - date: {}", datetime.format("%A, %-d %B %Y %H:%M"));
    println!(" - slot: {slot}");
    println!("---");

    let open = index.open_at(slot);

    if open.is_empty() {
        println!(" (no open clinic)");
    }

    for name in open {
        println!(" - {name}");
    }
}
