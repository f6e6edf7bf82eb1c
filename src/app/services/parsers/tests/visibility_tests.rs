//! Tests for the visibility parser

use crate::app::models::{CompassOctant, VisibilityUnit};
use crate::app::services::parsers::visibility::parse_visibility;
use crate::error::ComponentError;

#[test]
fn test_four_digit_meters() {
    let vis = parse_visibility("1200").unwrap();
    assert_eq!(vis.value, 1200.0);
    assert_eq!(vis.unit, VisibilityUnit::Meters);
    assert!(!vis.is_cavok);
    assert!(!vis.is_greater_than);
}

#[test]
fn test_9999_means_ten_km_or_more() {
    let vis = parse_visibility("9999").unwrap();
    assert_eq!(vis.value, 9999.0);
    assert!(vis.is_greater_than);
}

#[test]
fn test_cavok() {
    let vis = parse_visibility("CAVOK").unwrap();
    assert!(vis.is_cavok);
    assert_eq!(vis.value, 9999.0);
    assert_eq!(vis.unit, VisibilityUnit::Meters);
}

#[test]
fn test_statute_miles() {
    let vis = parse_visibility("10SM").unwrap();
    assert_eq!(vis.value, 10.0);
    assert_eq!(vis.unit, VisibilityUnit::StatuteMiles);
}

#[test]
fn test_fractional_statute_miles() {
    let vis = parse_visibility("1/2SM").unwrap();
    assert_eq!(vis.value, 0.5);

    let vis = parse_visibility("1 1/2SM").unwrap();
    assert_eq!(vis.value, 1.5);
}

#[test]
fn test_greater_and_less_than_prefixes() {
    let vis = parse_visibility("P6SM").unwrap();
    assert_eq!(vis.value, 6.0);
    assert!(vis.is_greater_than);
    assert!(!vis.is_less_than);

    let vis = parse_visibility("M1/4SM").unwrap();
    assert_eq!(vis.value, 0.25);
    assert!(vis.is_less_than);
}

#[test]
fn test_directional_qualifier() {
    let vis = parse_visibility("4000NE").unwrap();
    assert_eq!(vis.value, 4000.0);
    assert_eq!(vis.direction, Some(CompassOctant::Northeast));
}

#[test]
fn test_no_directional_variation() {
    let vis = parse_visibility("2000NDV").unwrap();
    assert_eq!(vis.value, 2000.0);
    assert!(vis.no_directional_variation);
    assert_eq!(vis.direction, None);
}

#[test]
fn test_malformed_visibility_fails_typed() {
    let err = parse_visibility("12345").unwrap_err();
    assert!(matches!(err, ComponentError::Visibility { .. }));

    let err = parse_visibility("1/0SM").unwrap_err();
    assert!(matches!(err, ComponentError::Visibility { .. }));
}
