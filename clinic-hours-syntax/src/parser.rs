use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::rules::day as ds;
use crate::rules::time as ts;
use crate::rules::ScheduleEntry;

#[cfg(feature = "log")]
static WARN_TWELVE_AM: std::sync::Once = std::sync::Once::new();

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct ScheduleParser;

// Positions of the tokens of an entry once split on spaces, the token
// between both hours is never inspected.
const DAY_TOKEN: usize = 0;
const START_HOUR_TOKEN: usize = 1;
const END_HOUR_TOKEN: usize = 3;

/// Parse a full schedule entry such as `Mon-Fri 11am to 11pm`.
///
/// ```
/// let entry = clinic_hours_syntax::parse("Fri 11am to 11pm").unwrap();
/// assert_eq!(entry.days.days(), 5..=5);
/// assert_eq!(entry.hours.hours(), 11..=23);
/// ```
pub fn parse(data: &str) -> Result<ScheduleEntry> {
    let days = parse_day_range(data)?;
    let hours = parse_hour_range(data)?;
    Ok(ScheduleEntry { days, hours })
}

/// Parse the week days covered by a schedule entry from its first token.
///
/// ```
/// use clinic_hours_syntax::parse_day_range;
///
/// let days = parse_day_range("Mon-Fri 11am to 11pm").unwrap();
/// assert_eq!((days.start_day(), days.end_day()), (1, 5));
///
/// let days = parse_day_range("Fri 11am to 11pm").unwrap();
/// assert_eq!((days.start_day(), days.end_day()), (5, 5));
/// ```
pub fn parse_day_range(data: &str) -> Result<ds::DayRange> {
    let pair = ScheduleParser::parse(Rule::input_day_range, nth_token(data, DAY_TOKEN)?)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no day range found");

    build_day_range(pair)
}

/// Parse the hours covered by a schedule entry from its second and fourth
/// tokens, failing if the range ends before it starts.
///
/// ```
/// use clinic_hours_syntax::parse_hour_range;
///
/// let hours = parse_hour_range("Sun 12pm to 9pm").unwrap();
/// assert_eq!((hours.start, hours.end), (12, 21));
///
/// assert!(parse_hour_range("Sat 11am to 2am").is_err());
/// ```
pub fn parse_hour_range(data: &str) -> Result<ts::HourRange> {
    let start = parse_hour(nth_token(data, START_HOUR_TOKEN)?)?;
    let end = parse_hour(nth_token(data, END_HOUR_TOKEN)?)?;

    if start > end {
        return Err(Error::InvalidHourRange { start, end });
    }

    Ok(ts::HourRange { start, end })
}

fn nth_token(data: &str, position: usize) -> Result<&str> {
    data.split(' ')
        .nth(position)
        .ok_or(Error::MissingToken { position })
}

fn parse_hour(token: &str) -> Result<u8> {
    let pair = ScheduleParser::parse(Rule::input_hour, token)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no hour found");

    Ok(build_hour(pair))
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

// ---
// --- Days
// ---

fn build_day_range(pair: Pair<Rule>) -> Result<ds::DayRange> {
    assert_eq!(pair.as_rule(), Rule::day_range);
    let mut pairs = pair.into_inner();

    let start = build_wday(pairs.next().expect("empty day range"))?;
    let end = pairs.next().map(build_wday).transpose()?.unwrap_or(start);
    Ok(ds::DayRange { start, end })
}

fn build_wday(pair: Pair<Rule>) -> Result<ds::Weekday> {
    assert_eq!(pair.as_rule(), Rule::wday);

    Ok(match pair.as_str() {
        "Mon" => ds::Weekday::Mon,
        "Tue" => ds::Weekday::Tue,
        "Wed" => ds::Weekday::Wed,
        "Thu" => ds::Weekday::Thu,
        "Fri" => ds::Weekday::Fri,
        "Sat" => ds::Weekday::Sat,
        "Sun" => ds::Weekday::Sun,
        other => return Err(Error::UnmappedWeekday(other.to_string())),
    })
}

// ---
// --- Hours
// ---

fn build_hour(pair: Pair<Rule>) -> u8 {
    assert_eq!(pair.as_rule(), Rule::hour);
    let mut pairs = pair.into_inner();

    let value: u8 = pairs
        .next()
        .expect("missing hour number")
        .as_str()
        .parse()
        .expect("invalid hour number");

    // Note that `12am` is kept as 12 rather than midnight.
    match build_meridiem(pairs.next().expect("missing meridiem")) {
        Meridiem::Am if value == 12 => {
            #[cfg(feature = "log")]
            WARN_TWELVE_AM.call_once(|| log::warn!("`12am` is read as 12:00, not as midnight"));
            value
        }
        Meridiem::Am => value,
        Meridiem::Pm if value == 12 => value,
        Meridiem::Pm => value + 12,
    }
}

fn build_meridiem(pair: Pair<Rule>) -> Meridiem {
    assert_eq!(pair.as_rule(), Rule::meridiem);
    let pair = pair.into_inner().next().expect("empty meridiem");

    match pair.as_rule() {
        Rule::am => Meridiem::Am,
        Rule::pm => Meridiem::Pm,
        other => unexpected_token(other, Rule::meridiem),
    }
}

// Misc

enum Meridiem {
    Am,
    Pm,
}
