use clinic_hours::{open_clinics, parse_schedule, Clinic, ScheduleEntry, TimeSlot};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SCH_SINGLE_DAY: &str = "Fri 11am to 11pm";
const SCH_WEEK: &str = "Mon-Sun 0am to 11pm";
const LISTING: &str = include_str!("../src/tests/data/clinics.txt");

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("single_day", |b| {
        b.iter(|| black_box(SCH_SINGLE_DAY).parse::<ScheduleEntry>().unwrap())
    });

    group.bench_function("week", |b| {
        b.iter(|| black_box(SCH_WEEK).parse::<ScheduleEntry>().unwrap())
    });
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    let listing = Clinic::parse_listing(LISTING).unwrap();

    let crowded: Vec<_> = (0..100)
        .map(|i| Clinic::new(format!("Clinic #{i:03}"), [SCH_WEEK, SCH_SINGLE_DAY]))
        .collect();

    group.bench_function("listing", |b| {
        b.iter(|| parse_schedule(black_box(&listing)))
    });

    group.bench_function("crowded", |b| {
        b.iter(|| parse_schedule(black_box(&crowded)))
    });
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_clinics");

    let crowded: Vec<_> = (0..100)
        .map(|i| Clinic::new(format!("Clinic #{i:03}"), [SCH_WEEK]))
        .collect();

    let indexes = [
        ("listing", parse_schedule(&Clinic::parse_listing(LISTING).unwrap())),
        ("crowded", parse_schedule(&crowded)),
    ];

    for (slug, index) in &indexes {
        group.bench_function(*slug, |b| {
            b.iter(|| open_clinics(black_box(index), black_box(TimeSlot::new(5, 16))).len())
        });
    }
}

criterion_group!(benches, bench_parse, bench_compile, bench_query);
criterion_main!(benches);
