//! Integration tests decoding complete TAF forecasts through the public API

use metaf_decoder::app::models::{
    ChangeKind, DayHour, Phenomenon, Report, TemperatureExtreme, ValidPeriod,
};
use metaf_decoder::{ComponentError, DecodeError, decode};

fn taf(raw: &str) -> metaf_decoder::TafReport {
    match decode(raw).expect("decode") {
        Report::Taf(taf) => taf,
        Report::Metar(_) => panic!("expected TAF for {raw}"),
    }
}

fn day_hour(day: u8, hour: u8) -> DayHour {
    DayHour::new(day, hour)
}

#[test]
fn decodes_single_period_forecast() {
    let report = taf("TAF KJFK 061730Z 0618/0724 28008KT 9999 FEW250");

    assert_eq!(report.station, "KJFK");
    assert_eq!(report.issue_time.day, 6);
    assert_eq!(report.issue_time.hour, 17);
    assert_eq!(report.issue_time.minute, 30);
    assert_eq!(
        report.valid_period,
        Some(ValidPeriod::new(day_hour(6, 18), day_hour(7, 24)))
    );

    assert_eq!(report.periods.len(), 1);
    let initial = &report.periods[0];
    assert_eq!(initial.kind, ChangeKind::Initial);
    assert!(initial.wind.is_some());
    assert!(initial.visibility.is_some());
    assert_eq!(initial.sky.len(), 1);
    assert!(report.warnings.is_empty());
}

#[test]
fn fm_resets_and_becmg_inherits() {
    let report = taf(
        "TAF KJFK 061730Z 0618/0724 28008KT 9999 FEW250 TX25/0620Z \
         FM0620 32015G25KT 6000 BKN015 \
         BECMG 0700/0702 9999 NSW",
    );

    assert_eq!(report.periods.len(), 3);

    let fm = &report.periods[1];
    assert_eq!(fm.kind, ChangeKind::From);
    // FM states its own complete conditions; nothing carries over.
    assert_eq!(fm.wind.expect("wind").gust, Some(25));
    assert_eq!(fm.visibility.as_ref().expect("visibility").value, 6000.0);
    assert!(fm.temperatures.is_empty());

    let becmg = &report.periods[2];
    assert_eq!(becmg.kind, ChangeKind::Becoming);
    assert_eq!(
        becmg.window,
        Some(ValidPeriod::new(day_hour(7, 0), day_hour(7, 2)))
    );
    // Visibility and weather are stated; wind and sky come from the FM period.
    assert_eq!(becmg.visibility.as_ref().expect("visibility").value, 9999.0);
    assert_eq!(
        becmg.weather[0].phenomena,
        vec![Phenomenon::NoSignificantWeather]
    );
    assert_eq!(becmg.wind, fm.wind);
    assert_eq!(becmg.sky, fm.sky);
}

#[test]
fn validity_windows_are_ordered_and_contained() {
    let report = taf(
        "TAF EGLL 061700Z 0618/0724 24010KT 9999 SCT035 \
         TEMPO 0618/0624 4000 SHRA \
         FM070300 30008KT 9999 FEW040 \
         PROB40 TEMPO 0712/0718 BKN014",
    );

    let overall = report.valid_period.expect("valid period");
    let starts: Vec<_> = report
        .periods
        .iter()
        .filter_map(|p| p.window.map(|w| w.start))
        .collect();

    for pair in starts.windows(2) {
        assert!(pair[1].wrapping_ge(pair[0]), "periods out of order");
    }
    for period in report.periods.iter().skip(1) {
        let window = period.window.expect("window");
        assert!(overall.contains(&window), "window escapes the valid span");
    }
    assert!(report.warnings.is_empty());
}

#[test]
fn decodes_temperature_extremes() {
    let report = taf("TAF KJFK 061730Z 0618/0724 28008KT P6SM FEW250 TX28/0618Z TNM02/0709Z");

    let temps = &report.periods[0].temperatures;
    assert_eq!(temps.len(), 2);
    assert_eq!(
        (temps[0].kind, temps[0].value),
        (TemperatureExtreme::Maximum, 28)
    );
    assert_eq!(
        (temps[1].kind, temps[1].value),
        (TemperatureExtreme::Minimum, -2)
    );
    assert_eq!(temps[1].at, day_hour(7, 9));
}

#[test]
fn malformed_window_keeps_period_with_warning() {
    let report = taf("TAF KJFK 061730Z 0618/0724 28008KT 9999 BECMG 0706/0702 4000");

    assert_eq!(report.periods.len(), 2);
    assert_eq!(
        report.periods[1].window,
        Some(ValidPeriod::new(day_hour(7, 6), day_hour(7, 2)))
    );
    assert!(
        report
            .warnings
            .iter()
            .any(|w| matches!(w.error, ComponentError::PeriodOrdering { .. }))
    );
}

#[test]
fn missing_mandatory_groups_are_fatal() {
    assert!(matches!(
        decode("TAF 061730Z 0618/0724 28008KT").unwrap_err(),
        DecodeError::MissingMandatoryGroup {
            group: "station identifier",
            ..
        }
    ));
    assert!(matches!(
        decode("TAF KJFK 0618/0724 28008KT").unwrap_err(),
        DecodeError::MissingMandatoryGroup {
            group: "issue time",
            ..
        }
    ));
}

#[test]
fn decode_is_idempotent() {
    let raw = "TAF EGLL 061700Z 0618/0724 24010KT 9999 SCT035 TEMPO 0618/0624 4000 SHRA FM070300 30008KT CAVOK";
    assert_eq!(decode(raw).expect("first"), decode(raw).expect("second"));
}

#[test]
fn glued_change_groups_are_normalized() {
    // Some encoders omit the space before FM and PROB groups.
    let report = taf("TAF KJFK 061730Z 0618/0724 28008KT 9999FM062000 31010KT 8000 PROB30TEMPO 0704/0708 0800 FG");

    assert_eq!(report.periods.len(), 3);
    assert_eq!(report.periods[1].kind, ChangeKind::From);
    assert_eq!(
        report.periods[2].kind,
        ChangeKind::Probability {
            percent: 30,
            tempo: true
        }
    );
}
