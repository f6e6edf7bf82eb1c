//! Tests for the time group parsers

use crate::app::models::{DayHour, ReportTime};
use crate::app::services::parsers::time::{
    TrendTimeKind, parse_fm_day_hour, parse_fm_time, parse_report_time, parse_trend_time,
    parse_valid_period,
};

#[test]
fn test_report_time() {
    assert_eq!(
        parse_report_time("061751Z"),
        Some(ReportTime {
            day: 6,
            hour: 17,
            minute: 51
        })
    );
}

#[test]
fn test_report_time_rejects_bad_fields() {
    assert_eq!(parse_report_time("061751"), None); // missing Z
    assert_eq!(parse_report_time("401751Z"), None); // day 40
    assert_eq!(parse_report_time("062551Z"), None); // hour 25
    assert_eq!(parse_report_time("061775Z"), None); // minute 75
    assert_eq!(parse_report_time("28008KT"), None);
}

#[test]
fn test_valid_period() {
    let period = parse_valid_period("0618/0724").unwrap();
    assert_eq!(period.start, DayHour::new(6, 18));
    assert_eq!(period.end, DayHour::new(7, 24));
    assert!(period.is_well_ordered());
}

#[test]
fn test_valid_period_rejects_bad_fields() {
    assert_eq!(parse_valid_period("0618"), None);
    assert_eq!(parse_valid_period("0018/0724"), None); // day 0
    assert_eq!(parse_valid_period("0625/0724"), None); // hour 25
}

#[test]
fn test_fm_change_points() {
    assert_eq!(parse_fm_time("FM061200"), Some(DayHour::new(6, 12)));
    assert_eq!(parse_fm_time("FM0612"), None);
    assert_eq!(parse_fm_day_hour("FM0620"), Some(DayHour::new(6, 20)));
}

#[test]
fn test_trend_times() {
    let (kind, at) = parse_trend_time("FM1030").unwrap();
    assert_eq!(kind, TrendTimeKind::From);
    assert_eq!((at.hour, at.minute), (10, 30));

    let (kind, _) = parse_trend_time("TL1130").unwrap();
    assert_eq!(kind, TrendTimeKind::Until);

    let (kind, _) = parse_trend_time("AT1100").unwrap();
    assert_eq!(kind, TrendTimeKind::At);

    assert_eq!(parse_trend_time("FM061200"), None);
}
