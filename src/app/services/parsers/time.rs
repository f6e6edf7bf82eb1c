//! Time group parsers
//!
//! Report times and validity windows are calendar-free day/hour(/minute)
//! values. Field ranges are validated here; the assemblers decide whether a
//! failed time parse is fatal (primary time group) or a warning (everything
//! else).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{DayHour, HourMinute, ReportTime, ValidPeriod};

static REPORT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})(\d{2})(\d{2})Z$").expect("report time pattern"));

static VALID_PERIOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})(\d{2})/(\d{2})(\d{2})$").expect("valid period pattern"));

static FM_LONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^FM(\d{2})(\d{2})(\d{2})$").expect("FM time pattern"));

static FM_SHORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^FM(\d{2})(\d{2})$").expect("short FM time pattern"));

static TREND_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(FM|TL|AT)(\d{2})(\d{2})$").expect("trend time pattern"));

/// Parse a `DDHHMM Z` observation/issue time group
pub fn parse_report_time(token: &str) -> Option<ReportTime> {
    let caps = REPORT_TIME.captures(token)?;
    let day = parse_day(&caps[1])?;
    let hour = parse_hour(&caps[2])?;
    let minute = parse_minute(&caps[3])?;
    Some(ReportTime { day, hour, minute })
}

/// Parse a TAF `DDHH/DDHH` valid-period group
pub fn parse_valid_period(token: &str) -> Option<ValidPeriod> {
    let caps = VALID_PERIOD.captures(token)?;
    let start = DayHour::new(parse_day(&caps[1])?, parse_hour(&caps[2])?);
    let end = DayHour::new(parse_day(&caps[3])?, parse_hour(&caps[4])?);
    Some(ValidPeriod::new(start, end))
}

/// Parse the day/hour change point of a `FMDDHHMM` group. Minutes are
/// dropped: validity windows carry day/hour resolution.
pub fn parse_fm_time(token: &str) -> Option<DayHour> {
    let caps = FM_LONG.captures(token)?;
    Some(DayHour::new(parse_day(&caps[1])?, parse_hour(&caps[2])?))
}

/// Parse the old-style four-digit `FMDDHH` change point
pub fn parse_fm_day_hour(token: &str) -> Option<DayHour> {
    let caps = FM_SHORT.captures(token)?;
    Some(DayHour::new(parse_day(&caps[1])?, parse_hour(&caps[2])?))
}

/// Which qualifier a METAR trend time carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendTimeKind {
    From,
    Until,
    At,
}

/// Parse a `FM`/`TL`/`AT` + `HHMM` trend time token
pub fn parse_trend_time(token: &str) -> Option<(TrendTimeKind, HourMinute)> {
    let caps = TREND_TIME.captures(token)?;
    let kind = match &caps[1] {
        "FM" => TrendTimeKind::From,
        "TL" => TrendTimeKind::Until,
        _ => TrendTimeKind::At,
    };
    let hour = parse_hour(&caps[2])?;
    let minute = parse_minute(&caps[3])?;
    Some((kind, HourMinute { hour, minute }))
}

fn parse_day(digits: &str) -> Option<u8> {
    let day: u8 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

fn parse_hour(digits: &str) -> Option<u8> {
    let hour: u8 = digits.parse().ok()?;
    // Hour 24 is legal at the end of a validity window.
    (hour <= 24).then_some(hour)
}

fn parse_minute(digits: &str) -> Option<u8> {
    let minute: u8 = digits.parse().ok()?;
    (minute <= 59).then_some(minute)
}
