//! Parser for free text half-lives

// external crates
use log::trace;

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::space0;
use nom::combinator::{opt, value};
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::IResult;

/// Read the leading number of a half-life as hours
///
/// Catalogs tend to write half-lives as text such as "6.02 h", "110 min", or
/// "8.02 d". The leading number is taken and scaled by the unit that follows
/// it. No unit, or an unrecognised unit, is assumed to be hours.
///
/// Only positive finite results are returned.
///
/// ```text
/// "6.02 h"  -> 6.02
/// "110 min" -> 1.8333
/// "8.02 d"  -> 192.48
/// ```
pub(crate) fn hours_from_str(i: &str) -> Option<f64> {
    let (_, (number, unit)) = half_life(i.trim()).ok()?;
    let hours = unit.unwrap_or(TimeUnit::Hours).to_hours(number);
    trace!("{i:?} read as {hours} h");
    (hours.is_finite() && hours > 0.0).then_some(hours)
}

/// Time units seen in free text half-lives
#[derive(Debug, Clone, Copy, PartialEq)]
enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
}

impl TimeUnit {
    fn to_hours(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value / 3600.0,
            TimeUnit::Minutes => value / 60.0,
            TimeUnit::Hours => value,
            TimeUnit::Days => value * 24.0,
            TimeUnit::Years => value * 8766.0,
        }
    }
}

/// <number><space><unit>
fn half_life(i: &str) -> IResult<&str, (f64, Option<TimeUnit>)> {
    let (i, number) = double(i)?;
    let (i, unit) = opt(preceded(space0, time_unit))(i)?;
    Ok((i, (number, unit)))
}

/// Longer spellings come first so that "std" is not read as "s"
fn time_unit(i: &str) -> IResult<&str, TimeUnit> {
    alt((
        value(
            TimeUnit::Hours,
            alt((
                tag_no_case("hours"),
                tag_no_case("hrs"),
                tag_no_case("hr"),
                tag_no_case("std"),
                tag_no_case("h"),
            )),
        ),
        value(
            TimeUnit::Minutes,
            alt((tag_no_case("minutes"), tag_no_case("min"))),
        ),
        value(
            TimeUnit::Seconds,
            alt((tag_no_case("sec"), tag_no_case("s"))),
        ),
        value(
            TimeUnit::Days,
            alt((tag_no_case("days"), tag_no_case("tage"), tag_no_case("d"))),
        ),
        value(TimeUnit::Years, alt((tag_no_case("years"), tag_no_case("y")))),
    ))(i)
}
