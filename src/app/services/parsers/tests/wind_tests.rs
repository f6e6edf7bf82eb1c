//! Tests for the wind group parser

use crate::app::models::{SpeedUnit, WindDirection};
use crate::app::services::parsers::wind::{parse_variable_range, parse_wind};
use crate::error::ComponentError;

#[test]
fn test_standard_wind() {
    let wind = parse_wind("28008KT").unwrap();
    assert_eq!(wind.direction, WindDirection::Degrees(280));
    assert_eq!(wind.speed, 8);
    assert_eq!(wind.gust, None);
    assert_eq!(wind.unit, SpeedUnit::Knots);
    assert!(!wind.speed_exceeds);
}

#[test]
fn test_wind_with_gust() {
    let wind = parse_wind("28008G15KT").unwrap();
    assert_eq!(wind.gust, Some(15));
    assert!(wind.gust.unwrap() > wind.speed);
}

#[test]
fn test_gust_must_exceed_sustained_speed() {
    let err = parse_wind("28020G15KT").unwrap_err();
    assert!(matches!(err, ComponentError::Wind { .. }));

    // Equal gust and sustained speed is also inconsistent.
    let err = parse_wind("28015G15KT").unwrap_err();
    assert!(matches!(err, ComponentError::Wind { .. }));
}

#[test]
fn test_variable_direction() {
    let wind = parse_wind("VRB03KT").unwrap();
    assert_eq!(wind.direction, WindDirection::Variable);
    assert_eq!(wind.speed, 3);
}

#[test]
fn test_metric_units() {
    assert_eq!(parse_wind("14005MPS").unwrap().unit, SpeedUnit::MetersPerSecond);
    assert_eq!(
        parse_wind("14010KMH").unwrap().unit,
        SpeedUnit::KilometersPerHour
    );
}

#[test]
fn test_extreme_speeds() {
    let wind = parse_wind("P99KT").unwrap();
    assert!(wind.speed_exceeds);
    assert_eq!(wind.speed, 99);

    let wind = parse_wind("ABV49MPS").unwrap();
    assert!(wind.speed_exceeds);
    assert_eq!(wind.direction, WindDirection::Variable);
    assert_eq!(wind.speed, 49);
    assert_eq!(wind.unit, SpeedUnit::MetersPerSecond);
}

#[test]
fn test_three_digit_speed() {
    let wind = parse_wind("270105G130KT").unwrap();
    assert_eq!(wind.speed, 105);
    assert_eq!(wind.gust, Some(130));
}

#[test]
fn test_malformed_wind_fails_typed() {
    let err = parse_wind("28XXKT").unwrap_err();
    assert!(matches!(err, ComponentError::Wind { .. }));
    assert_eq!(err.token(), "28XXKT");
}

#[test]
fn test_direction_out_of_range() {
    let err = parse_wind("37510KT").unwrap_err();
    assert!(matches!(err, ComponentError::Wind { .. }));
}

#[test]
fn test_variable_range() {
    assert_eq!(parse_variable_range("240V340").unwrap(), (240, 340));
    assert!(parse_variable_range("240V999").is_err());
    assert!(parse_variable_range("240340").is_err());
}
