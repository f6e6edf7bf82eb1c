//! Remarks section parser
//!
//! A second-pass dispatcher over the tokens following the `RMK` marker.
//! Remark tokens reuse prefixes the main body assigns unrelated meanings
//! (`1...` groups are six-hour temperatures here, not visibility), so the
//! remarks grammar table is kept fully separate from the body table.
//!
//! Remarks are best-effort: an unrecognized token becomes a
//! [`RemarkEntry::FreeText`] entry plus an unrecognized-token warning, never
//! a decode failure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{RemarkEntry, SensorStatus};
use crate::app::services::tokenizer::RawToken;
use crate::error::{ComponentError, DecodeWarning};

/// Closed set of recognized remark kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemarkKind {
    AutomatedStation,
    SeaLevelPressureMissing,
    SeaLevelPressure,
    PreciseTemperature,
    PressureTendency,
    HourlyPrecipitation,
    SixHourPrecipitation,
    SixHourMaxTemperature,
    SixHourMinTemperature,
    TwentyFourHourTemperature,
    PeakWindMarker,
    WindShiftMarker,
    PressureRisingRapidly,
    PressureFallingRapidly,
    FrontalPassage,
    SensorStatus,
    Maintenance,
}

struct RemarkRule {
    kind: RemarkKind,
    pattern: Regex,
}

impl RemarkRule {
    fn new(kind: RemarkKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("remark rule pattern"),
        }
    }
}

/// The remarks grammar, most specific rule first
static REMARK_RULES: Lazy<Vec<RemarkRule>> = Lazy::new(|| {
    vec![
        RemarkRule::new(RemarkKind::AutomatedStation, r"^AO[12]$"),
        RemarkRule::new(RemarkKind::SeaLevelPressureMissing, r"^SLPNO$"),
        RemarkRule::new(RemarkKind::SeaLevelPressure, r"^SLP\d{3}$"),
        RemarkRule::new(
            RemarkKind::PreciseTemperature,
            r"^T[01]\d{3}(?:[01]\d{3})?$",
        ),
        RemarkRule::new(RemarkKind::PressureTendency, r"^5[0-8]\d{3}$"),
        RemarkRule::new(RemarkKind::HourlyPrecipitation, r"^P\d{4}$"),
        RemarkRule::new(RemarkKind::SixHourPrecipitation, r"^6\d{4}$"),
        RemarkRule::new(RemarkKind::SixHourMaxTemperature, r"^1[01]\d{3}$"),
        RemarkRule::new(RemarkKind::SixHourMinTemperature, r"^2[01]\d{3}$"),
        RemarkRule::new(
            RemarkKind::TwentyFourHourTemperature,
            r"^4[01]\d{3}[01]\d{3}$",
        ),
        RemarkRule::new(RemarkKind::PeakWindMarker, r"^PK$"),
        RemarkRule::new(RemarkKind::WindShiftMarker, r"^WSHFT$"),
        RemarkRule::new(RemarkKind::PressureRisingRapidly, r"^PRESRR$"),
        RemarkRule::new(RemarkKind::PressureFallingRapidly, r"^PRESFR$"),
        RemarkRule::new(RemarkKind::FrontalPassage, r"^FROPA$"),
        RemarkRule::new(
            RemarkKind::SensorStatus,
            &format!("^(?:{})$", crate::constants::SENSOR_STATUS_CODES.join("|")),
        ),
        RemarkRule::new(RemarkKind::Maintenance, r"^\$$"),
    ]
});

static PEAK_WIND_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})(\d{2,3})/(\d{2})?(\d{2})$").expect("peak wind pattern"));

static WIND_SHIFT_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})?(\d{2})$").expect("wind shift pattern"));

fn classify_remark(token: &str) -> Option<RemarkKind> {
    REMARK_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(token))
        .map(|rule| rule.kind)
}

/// Parse the token run following the `RMK` marker
pub fn parse_remarks(tokens: &[RawToken]) -> (Vec<RemarkEntry>, Vec<DecodeWarning>) {
    let mut entries = Vec::new();
    let mut warnings = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let text = token.text.as_str();

        let Some(kind) = classify_remark(text) else {
            entries.push(RemarkEntry::FreeText {
                text: text.to_string(),
            });
            warnings.push(DecodeWarning::new(
                ComponentError::unrecognized(text),
                token.position,
            ));
            i += 1;
            continue;
        };

        match kind {
            RemarkKind::AutomatedStation => {
                entries.push(RemarkEntry::AutomatedStation {
                    precipitation_discriminator: text == "AO2",
                });
            }
            RemarkKind::SeaLevelPressureMissing => {
                entries.push(RemarkEntry::SeaLevelPressureMissing);
            }
            RemarkKind::SeaLevelPressure => {
                entries.push(decode_sea_level_pressure(text));
            }
            RemarkKind::PreciseTemperature => {
                entries.push(decode_precise_temperature(text));
            }
            RemarkKind::PressureTendency => {
                entries.push(decode_pressure_tendency(text));
            }
            RemarkKind::HourlyPrecipitation => {
                entries.push(RemarkEntry::HourlyPrecipitation {
                    inches: hundredths(&text[1..]),
                });
            }
            RemarkKind::SixHourPrecipitation => {
                entries.push(RemarkEntry::SixHourPrecipitation {
                    inches: hundredths(&text[1..]),
                });
            }
            RemarkKind::SixHourMaxTemperature => {
                entries.push(RemarkEntry::SixHourMaxTemperature {
                    celsius: signed_tenths(&text[1..]),
                });
            }
            RemarkKind::SixHourMinTemperature => {
                entries.push(RemarkEntry::SixHourMinTemperature {
                    celsius: signed_tenths(&text[1..]),
                });
            }
            RemarkKind::TwentyFourHourTemperature => {
                entries.push(RemarkEntry::TwentyFourHourTemperature {
                    max_celsius: signed_tenths(&text[1..5]),
                    min_celsius: signed_tenths(&text[5..]),
                });
            }
            RemarkKind::PeakWindMarker => {
                // PK WND dddff(f)/(hh)mm spans three tokens.
                match decode_peak_wind(tokens, i) {
                    Some((entry, consumed)) => {
                        entries.push(entry);
                        i += consumed;
                        continue;
                    }
                    None => {
                        entries.push(RemarkEntry::FreeText {
                            text: text.to_string(),
                        });
                        warnings.push(DecodeWarning::new(
                            ComponentError::unrecognized(text),
                            token.position,
                        ));
                    }
                }
            }
            RemarkKind::WindShiftMarker => match decode_wind_shift(tokens, i) {
                Some((entry, consumed)) => {
                    entries.push(entry);
                    i += consumed;
                    continue;
                }
                None => {
                    entries.push(RemarkEntry::FreeText {
                        text: text.to_string(),
                    });
                    warnings.push(DecodeWarning::new(
                        ComponentError::unrecognized(text),
                        token.position,
                    ));
                }
            },
            RemarkKind::PressureRisingRapidly => {
                entries.push(RemarkEntry::PressureRisingRapidly);
            }
            RemarkKind::PressureFallingRapidly => {
                entries.push(RemarkEntry::PressureFallingRapidly);
            }
            RemarkKind::FrontalPassage => {
                entries.push(RemarkEntry::FrontalPassage);
            }
            RemarkKind::SensorStatus => {
                if let Some(sensor) = SensorStatus::from_code(text) {
                    entries.push(RemarkEntry::SensorStatus { sensor });
                }
            }
            RemarkKind::Maintenance => {
                entries.push(RemarkEntry::MaintenanceRequired);
            }
        }
        i += 1;
    }

    (entries, warnings)
}

/// `SLPxxx`: tenths of hPa above 1000 (values >= 500 read as 900-prefixed)
fn decode_sea_level_pressure(token: &str) -> RemarkEntry {
    let tenths: f64 = token[3..].parse().unwrap_or(0.0);
    let hpa = if tenths < 500.0 {
        1000.0 + tenths / 10.0
    } else {
        900.0 + tenths / 10.0
    };
    RemarkEntry::SeaLevelPressure { hpa }
}

/// `TsTTTsTTT`: temperature (and optional dewpoint) to tenths of a degree
fn decode_precise_temperature(token: &str) -> RemarkEntry {
    let temperature = signed_tenths(&token[1..5]);
    let dewpoint = if token.len() == 9 {
        Some(signed_tenths(&token[5..]))
    } else {
        None
    };
    RemarkEntry::PreciseTemperature {
        temperature,
        dewpoint,
    }
}

/// `5appp`: tendency characteristic plus change in tenths of hPa
fn decode_pressure_tendency(token: &str) -> RemarkEntry {
    let characteristic: u8 = token[1..2].parse().unwrap_or(0);
    let change_hpa: f64 = token[2..].parse::<f64>().unwrap_or(0.0) / 10.0;
    RemarkEntry::PressureTendency {
        characteristic,
        change_hpa,
    }
}

fn decode_peak_wind(tokens: &[RawToken], start: usize) -> Option<(RemarkEntry, usize)> {
    if tokens.get(start + 1).map(|t| t.text.as_str()) != Some("WND") {
        return None;
    }
    let value = tokens.get(start + 2)?;
    let caps = PEAK_WIND_VALUE.captures(&value.text)?;

    let direction: u16 = caps[1].parse().ok()?;
    let speed: u16 = caps[2].parse().ok()?;
    let hour: Option<u8> = caps.get(3).and_then(|h| h.as_str().parse().ok());
    let minute: u8 = caps[4].parse().ok()?;

    Some((
        RemarkEntry::PeakWind {
            direction,
            speed,
            hour,
            minute,
        },
        3,
    ))
}

fn decode_wind_shift(tokens: &[RawToken], start: usize) -> Option<(RemarkEntry, usize)> {
    let value = tokens.get(start + 1)?;
    let caps = WIND_SHIFT_VALUE.captures(&value.text)?;

    let hour: Option<u8> = caps.get(1).and_then(|h| h.as_str().parse().ok());
    let minute: u8 = caps[2].parse().ok()?;

    Some((RemarkEntry::WindShift { hour, minute }, 2))
}

/// Four digits read as hundredths (precipitation amounts)
fn hundredths(digits: &str) -> f64 {
    digits.parse::<f64>().unwrap_or(0.0) / 100.0
}

/// Sign digit (1 = negative) plus three digits of tenths
fn signed_tenths(digits: &str) -> f64 {
    let sign = if digits.starts_with('1') { -1.0 } else { 1.0 };
    sign * digits[1..].parse::<f64>().unwrap_or(0.0) / 10.0
}
