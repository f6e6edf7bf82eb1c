//! Integration tests decoding complete METAR reports through the public API

use metaf_decoder::app::models::{
    Intensity, Phenomenon, PressureUnit, RemarkEntry, RvrTrend, SkyCover, SpeedUnit,
    VisibilityUnit, WindDirection,
};
use metaf_decoder::{ComponentError, DecodeError, Report, decode};

fn metar(raw: &str) -> metaf_decoder::MetarReport {
    match decode(raw).expect("decode") {
        Report::Metar(metar) => metar,
        Report::Taf(_) => panic!("expected METAR for {raw}"),
    }
}

#[test]
fn decodes_routine_us_observation() {
    let report = metar("METAR KJFK 061751Z 28008KT 10SM FEW250 22/18 A2992");

    assert_eq!(report.station, "KJFK");
    assert_eq!(report.observation_time.day, 6);
    assert_eq!(report.observation_time.hour, 17);
    assert_eq!(report.observation_time.minute, 51);

    let wind = report.wind.expect("wind");
    assert_eq!(wind.direction, WindDirection::Degrees(280));
    assert_eq!(wind.speed, 8);
    assert_eq!(wind.gust, None);
    assert_eq!(wind.unit, SpeedUnit::Knots);

    let vis = report.visibility.expect("visibility");
    assert_eq!(vis.value, 10.0);
    assert_eq!(vis.unit, VisibilityUnit::StatuteMiles);

    assert_eq!(report.sky.len(), 1);
    assert_eq!(report.sky[0].cover, SkyCover::Few);
    assert_eq!(report.sky[0].height_ft, Some(25_000));

    let temperature = report.temperature.expect("temperature");
    assert_eq!(temperature.temperature, 22);
    assert_eq!(temperature.dewpoint, Some(18));

    let altimeter = report.altimeter.expect("altimeter");
    assert_eq!(altimeter.value, 29.92);
    assert_eq!(altimeter.unit, PressureUnit::InchesOfMercury);

    assert!(report.remarks.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn decodes_gust_and_automated_station_remark() {
    let report = metar("METAR KJFK 061751Z 28008G15KT 10SM FEW250 22/18 A2992 RMK AO2");

    let wind = report.wind.expect("wind");
    assert_eq!(wind.gust, Some(15));
    assert!(wind.gust.expect("gust") >= wind.speed);

    assert_eq!(
        report.remarks,
        vec![RemarkEntry::AutomatedStation {
            precipitation_discriminator: true
        }]
    );
}

#[test]
fn malformed_wind_yields_warning_not_failure() {
    let report = metar("METAR KJFK 061751Z 28XXKT 10SM FEW250 22/18 A2992");

    assert!(report.wind.is_none());
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        report.warnings[0].error,
        ComponentError::Wind { .. }
    ));
    assert_eq!(report.warnings[0].error.token(), "28XXKT");
    // Everything else survives.
    assert!(report.visibility.is_some());
    assert!(report.temperature.is_some());
    assert!(report.altimeter.is_some());
}

#[test]
fn empty_input_yields_empty_report_error() {
    assert_eq!(decode("").unwrap_err(), DecodeError::EmptyReport);
    assert_eq!(decode(" \t ").unwrap_err(), DecodeError::EmptyReport);
}

#[test]
fn missing_mandatory_groups_never_yield_partial_reports() {
    assert!(matches!(
        decode("METAR 061751Z 28008KT 10SM").unwrap_err(),
        DecodeError::MissingMandatoryGroup { .. }
    ));
    assert!(matches!(
        decode("METAR KJFK 28008KT 10SM").unwrap_err(),
        DecodeError::MissingMandatoryGroup { .. }
    ));
}

#[test]
fn decode_is_idempotent() {
    let raw = "METAR EDDF 061750Z 24012G22KT 210V270 2000 1200NW R25R/1100U -SHRA BKN004 OVC020CB 08/07 Q1019 TEMPO 3000 SHRA RMK AO2 SLP134 T00820071";
    let first = decode(raw).expect("first decode");
    let second = decode(raw).expect("second decode");
    assert_eq!(first, second);
}

#[test]
fn decodes_european_style_observation() {
    let report = metar("EDDF 061750Z 24008KT 9999 -RA SCT030 BKN050 08/07 Q1019 NOSIG");

    let vis = report.visibility.expect("visibility");
    assert_eq!(vis.unit, VisibilityUnit::Meters);
    assert!(vis.is_greater_than);

    assert_eq!(report.weather.len(), 1);
    assert_eq!(report.weather[0].intensity, Intensity::Light);
    assert_eq!(report.weather[0].phenomena, vec![Phenomenon::Rain]);

    let altimeter = report.altimeter.expect("altimeter");
    assert_eq!(altimeter.unit, PressureUnit::Hectopascals);
    assert_eq!(altimeter.value, 1019.0);

    assert_eq!(report.trends.len(), 1);
    assert!(report.warnings.is_empty());
}

#[test]
fn decodes_rvr_with_trend() {
    let report = metar("METAR KBOS 061754Z 04012KT 1/2SM R04R/2000V3000FT/U FG VV002 16/15 A2990");
    // The slash-trend variant is non-standard; the plain form must decode.
    let report2 = metar("METAR KBOS 061754Z 04012KT 1/2SM R04R/2000V3000U FG VV002 16/15 A2990");
    assert_eq!(report2.runway_visual_ranges.len(), 1);
    let rvr = &report2.runway_visual_ranges[0];
    assert_eq!(rvr.runway, "04R");
    assert_eq!(rvr.visual_range, 2000);
    assert_eq!(rvr.variable_range, Some(3000));
    assert_eq!(rvr.trend, Some(RvrTrend::Improving));

    // The non-standard token degrades to a warning, not a failure.
    assert!(report.warnings.iter().any(|w| matches!(
        w.error,
        ComponentError::Unrecognized { .. } | ComponentError::RunwayVisualRange { .. }
    )));
}

#[test]
fn tokenizer_round_trip_preserves_group_boundaries() {
    // Decoding depends on group boundaries only, so a doubly-spaced report
    // decodes identically to its normalized form.
    let normalized = "METAR KJFK 061751Z 28008KT 10SM FEW250 22/18 A2992";
    let spaced = "METAR  KJFK   061751Z  28008KT 10SM  FEW250 22/18  A2992";
    assert_eq!(
        decode(normalized).expect("normalized"),
        decode(spaced).expect("spaced")
    );
}
