//! Tests for the sky condition parser

use crate::app::models::{ConvectiveType, SkyCover};
use crate::app::services::parsers::sky::parse_sky;
use crate::error::ComponentError;

#[test]
fn test_cloud_layer_with_height() {
    let layer = parse_sky("FEW250").unwrap();
    assert_eq!(layer.cover, SkyCover::Few);
    assert_eq!(layer.height_ft, Some(25_000));
    assert_eq!(layer.convective, None);
}

#[test]
fn test_clear_sky_codes_have_no_height() {
    for code in ["SKC", "CLR", "NSC", "NCD"] {
        let layer = parse_sky(code).unwrap();
        assert_eq!(layer.height_ft, None, "{code}");
    }
    assert_eq!(parse_sky("SKC").unwrap().cover, SkyCover::Clear);
    assert_eq!(parse_sky("NCD").unwrap().cover, SkyCover::NoCloudDetected);
}

#[test]
fn test_vertical_visibility() {
    let layer = parse_sky("VV002").unwrap();
    assert_eq!(layer.cover, SkyCover::VerticalVisibility);
    assert_eq!(layer.height_ft, Some(200));
}

#[test]
fn test_convective_markers() {
    let layer = parse_sky("BKN015CB").unwrap();
    assert_eq!(layer.cover, SkyCover::Broken);
    assert_eq!(layer.convective, Some(ConvectiveType::Cumulonimbus));

    let layer = parse_sky("SCT030TCU").unwrap();
    assert_eq!(layer.convective, Some(ConvectiveType::ToweringCumulus));
}

#[test]
fn test_unknown_height_and_coverage() {
    let layer = parse_sky("BKN///").unwrap();
    assert_eq!(layer.cover, SkyCover::Broken);
    assert_eq!(layer.height_ft, None);

    let layer = parse_sky("//////").unwrap();
    assert_eq!(layer.cover, SkyCover::Unknown);
    assert_eq!(layer.height_ft, None);
}

#[test]
fn test_malformed_layer_fails_typed() {
    let err = parse_sky("BKN15").unwrap_err();
    assert!(matches!(err, ComponentError::SkyCondition { .. }));
}
