mod regression;

use crate::Clinic;

fn example_clinics() -> Vec<Clinic> {
    Clinic::parse_listing(include_str!("data/clinics.txt")).expect("invalid example listing")
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
}

#[macro_export]
macro_rules! open_at {
    ( $index: expr, $date: expr $( , )? ) => {{
        use $crate::{datetime, open_clinics};
        open_clinics(&$index, datetime!($date))
    }};
}
