//! Runway group parsers
//!
//! Two distinct R-prefixed group families share a surface syntax:
//!
//! - Runway Visual Range per ICAO: `R{rwy}/{M|P}{value}{V{M|P}{value}}{FT}{trend}`
//! - Runway state reports (MOTNE): `R{rwy}/{deposit}{extent}{depth}{braking}`
//!
//! The dispatcher tests the state grammar first; both parsers here assume
//! their own grammar already matched and perform strict field extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{RunwayState, RunwayVisualRange, RvrTrend, RvrUnit};
use crate::constants::{
    runway_braking_description, runway_deposit_description, runway_depth_description,
    runway_extent_description,
};
use crate::error::ComponentError;

static RVR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^R(\d{2}[LCR]?)/([PM])?(\d{4})(?:V([PM])?(\d{4}))?(FT)?([UDN])?$")
        .expect("RVR pattern")
});

static RUNWAY_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^R(\d{2}[LCR]?)/(\d|/)(\d|/)(\d{2}|//)(\d{2}|//)$").expect("runway state pattern")
});

/// Parse a runway visual range token
pub fn parse_rvr(token: &str) -> Result<RunwayVisualRange, ComponentError> {
    let caps = RVR
        .captures(token)
        .ok_or_else(|| ComponentError::rvr(token, "does not match the RVR grammar"))?;

    let visual_range: u16 = caps[3]
        .parse()
        .map_err(|_| ComponentError::rvr(token, "non-numeric visual range"))?;

    let variable_range = match caps.get(5) {
        Some(value) => Some(
            value
                .as_str()
                .parse::<u16>()
                .map_err(|_| ComponentError::rvr(token, "non-numeric variable range"))?,
        ),
        None => None,
    };

    // FT marks the US encoding; ICAO default is meters.
    let unit = if caps.get(6).is_some() {
        RvrUnit::Feet
    } else {
        RvrUnit::Meters
    };

    let trend = caps
        .get(7)
        .and_then(|t| t.as_str().chars().next())
        .and_then(RvrTrend::from_code);

    Ok(RunwayVisualRange {
        runway: caps[1].to_string(),
        visual_range,
        unit,
        is_less_than: caps.get(2).is_some_and(|m| m.as_str() == "M"),
        is_more_than: caps.get(2).is_some_and(|m| m.as_str() == "P"),
        variable_range,
        variable_less_than: caps.get(4).is_some_and(|m| m.as_str() == "M"),
        variable_more_than: caps.get(4).is_some_and(|m| m.as_str() == "P"),
        trend,
    })
}

/// Parse a MOTNE runway state token, decoding the coded fields to their
/// standard descriptions
pub fn parse_runway_state(token: &str) -> Result<RunwayState, ComponentError> {
    let caps = RUNWAY_STATE
        .captures(token)
        .ok_or_else(|| ComponentError::rvr(token, "does not match the runway state grammar"))?;

    let deposit_code = caps[2].chars().next().unwrap_or('/');
    let extent_code = caps[3].chars().next().unwrap_or('/');

    Ok(RunwayState {
        runway: caps[1].to_string(),
        deposit: runway_deposit_description(deposit_code).to_string(),
        contamination: runway_extent_description(extent_code).to_string(),
        depth: runway_depth_description(&caps[4]),
        braking: runway_braking_description(&caps[5]),
        raw: token.to_string(),
    })
}
