//! Tests for the altimeter/QNH parser

use crate::app::models::PressureUnit;
use crate::app::services::parsers::pressure::{parse_altimeter, parse_qnh};
use crate::error::ComponentError;

#[test]
fn test_us_altimeter() {
    let pressure = parse_altimeter("A2992").unwrap();
    assert_eq!(pressure.value, 29.92);
    assert_eq!(pressure.unit, PressureUnit::InchesOfMercury);
}

#[test]
fn test_icao_qnh() {
    let pressure = parse_altimeter("Q1013").unwrap();
    assert_eq!(pressure.value, 1013.0);
    assert_eq!(pressure.unit, PressureUnit::Hectopascals);
}

#[test]
fn test_alternative_qnh_encoding() {
    let pressure = parse_altimeter("QNH2992INS").unwrap();
    assert_eq!(pressure.value, 29.92);
    assert_eq!(pressure.unit, PressureUnit::InchesOfMercury);

    let pressure = parse_altimeter("QNH1013").unwrap();
    assert_eq!(pressure.value, 1013.0);
    assert_eq!(pressure.unit, PressureUnit::Hectopascals);
}

#[test]
fn test_qnh_range_heuristic() {
    // In range for hectopascals: read as stated.
    let pressure = parse_qnh("Q0995").unwrap();
    assert_eq!(pressure.unit, PressureUnit::Hectopascals);
    assert_eq!(pressure.value, 995.0);

    // Out of hPa range: read as inHg hundredths.
    let pressure = parse_qnh("Q2992").unwrap();
    assert_eq!(pressure.unit, PressureUnit::InchesOfMercury);
    assert_eq!(pressure.value, 29.92);
}

#[test]
fn test_wrong_digit_count_fails_typed() {
    let err = parse_altimeter("Q10133").unwrap_err();
    assert!(matches!(err, ComponentError::Altimeter { .. }));

    let err = parse_altimeter("A299").unwrap_err();
    assert!(matches!(err, ComponentError::Altimeter { .. }));
}
