//! Altimeter/QNH parser
//!
//! The prefix letter determines the unit: `A2992` is 29.92 inHg (US
//! altimeter, hundredths), `Q1013` is 1013 hPa (ICAO QNH, whole units).
//! The alternative `QNHxxxx(INS)` encoding and the bare-value range
//! heuristic used by some TAF QNH groups are also handled.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{Pressure, PressureUnit};
use crate::error::ComponentError;

static ALTIMETER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([AQ])(\d+)$").expect("altimeter pattern"));

static QNH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^QNH(\d+)(INS)?$").expect("QNH pattern"));

/// Parse an altimeter/QNH token into a [`Pressure`] value
pub fn parse_altimeter(token: &str) -> Result<Pressure, ComponentError> {
    if let Some(caps) = QNH.captures(token) {
        let value = parse_four_digits(token, &caps[1])?;
        return Ok(if caps.get(2).is_some() {
            Pressure {
                value: f64::from(value) / 100.0,
                unit: PressureUnit::InchesOfMercury,
            }
        } else {
            Pressure {
                value: f64::from(value),
                unit: PressureUnit::Hectopascals,
            }
        });
    }

    let caps = ALTIMETER
        .captures(token)
        .ok_or_else(|| ComponentError::altimeter(token, "does not match the altimeter grammar"))?;
    let value = parse_four_digits(token, &caps[2])?;

    Ok(match &caps[1] {
        "A" => Pressure {
            value: f64::from(value) / 100.0,
            unit: PressureUnit::InchesOfMercury,
        },
        _ => Pressure {
            value: f64::from(value),
            unit: PressureUnit::Hectopascals,
        },
    })
}

/// Parse a QNH group from a TAF change period. Falls back to a value-range
/// heuristic when the prefix alone cannot determine the unit: plausible
/// hectopascal values lie in 900..=1050, anything else reads as inHg
/// hundredths.
pub fn parse_qnh(token: &str) -> Result<Pressure, ComponentError> {
    if token.starts_with("QNH") {
        return parse_altimeter(token);
    }

    let caps = ALTIMETER
        .captures(token)
        .ok_or_else(|| ComponentError::altimeter(token, "does not match the QNH grammar"))?;
    let value = parse_four_digits(token, &caps[2])?;

    if &caps[1] == "A" {
        return Ok(Pressure {
            value: f64::from(value) / 100.0,
            unit: PressureUnit::InchesOfMercury,
        });
    }

    Ok(if (900..=1050).contains(&value) {
        Pressure {
            value: f64::from(value),
            unit: PressureUnit::Hectopascals,
        }
    } else {
        Pressure {
            value: f64::from(value) / 100.0,
            unit: PressureUnit::InchesOfMercury,
        }
    })
}

fn parse_four_digits(token: &str, digits: &str) -> Result<u16, ComponentError> {
    if digits.len() != 4 {
        return Err(ComponentError::altimeter(
            token,
            format!("expected 4 digits, found {}", digits.len()),
        ));
    }
    digits
        .parse()
        .map_err(|_| ComponentError::altimeter(token, "non-numeric pressure value"))
}
