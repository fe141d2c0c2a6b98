use crate::{run_fuzz_index, Data};

fn clinic(name: &str, opening_hours: &[&str]) -> (String, Vec<String>) {
    (
        name.to_string(),
        opening_hours.iter().map(|x| x.to_string()).collect(),
    )
}

#[test]
fn no_valid_entry() {
    assert!(!run_fuzz_index(Data {
        date_secs: 0,
        clinics: vec![clinic("Broken", &["Sat 11am to 2am", "Funday 9am to 5pm"])],
    }));
}

#[test]
fn invalid_date() {
    assert!(!run_fuzz_index(Data {
        date_secs: i64::MAX,
        clinics: vec![clinic("Mayo Clinic", &["Mon-Fri 7am to 11pm"])],
    }));
}

#[test]
fn twelve_am_round_trip() {
    assert!(run_fuzz_index(Data {
        date_secs: 1_717_754_400, // 2024-06-07 10:00 UTC
        clinics: vec![
            clinic("Night Owl", &["Fri 12am to 12pm", "Fri 0pm to 24am"]),
            clinic("Mayo Clinic", &["Mon-Fri 7am to 11pm", "Sat-Mon 9am to 5pm"]),
        ],
    }));
}
