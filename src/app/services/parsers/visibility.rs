//! Prevailing visibility parser
//!
//! Handles CAVOK, four-digit meter groups with optional compass-octant or
//! `NDV` suffixes, and statute-mile groups including fractions, mixed
//! fractions (`1 1/2SM`), and `P`/`M` greater/less-than prefixes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{CompassOctant, Visibility, VisibilityUnit};
use crate::constants::CAVOK_VISIBILITY_METERS;
use crate::error::ComponentError;

static METERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(N|NE|E|SE|S|SW|W|NW|NDV)?$").expect("meter vis pattern"));

static STATUTE_MILES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([PM])?(?:(\d{1,2}) )?(\d{1,2})(?:/(\d{1,2}))?SM$").expect("SM vis pattern")
});

/// Parse a prevailing-visibility token into a [`Visibility`] value
pub fn parse_visibility(token: &str) -> Result<Visibility, ComponentError> {
    if token == "CAVOK" {
        return Ok(Visibility::cavok());
    }

    if let Some(caps) = METERS.captures(token) {
        let value: u32 = caps[1]
            .parse()
            .map_err(|_| ComponentError::visibility(token, "non-numeric distance"))?;
        let mut visibility = Visibility::plain(f64::from(value), VisibilityUnit::Meters);

        // 9999 encodes "10 km or more".
        visibility.is_greater_than = value == CAVOK_VISIBILITY_METERS;

        match caps.get(2).map(|m| m.as_str()) {
            Some("NDV") => visibility.no_directional_variation = true,
            Some(octant) => {
                visibility.direction = Some(CompassOctant::from_code(octant).ok_or_else(|| {
                    ComponentError::visibility(token, format!("unknown octant '{octant}'"))
                })?);
            }
            None => {}
        }
        return Ok(visibility);
    }

    if let Some(caps) = STATUTE_MILES.captures(token) {
        let whole: f64 = match caps.get(2) {
            Some(whole) => whole
                .as_str()
                .parse()
                .map_err(|_| ComponentError::visibility(token, "non-numeric whole miles"))?,
            None => 0.0,
        };
        let numerator: f64 = caps[3]
            .parse()
            .map_err(|_| ComponentError::visibility(token, "non-numeric distance"))?;
        let value = match caps.get(4) {
            Some(denominator) => {
                let denominator: f64 = denominator
                    .as_str()
                    .parse()
                    .map_err(|_| ComponentError::visibility(token, "non-numeric denominator"))?;
                if denominator == 0.0 {
                    return Err(ComponentError::visibility(token, "zero denominator"));
                }
                whole + numerator / denominator
            }
            None if caps.get(2).is_some() => {
                return Err(ComponentError::visibility(
                    token,
                    "whole miles without a fractional part",
                ));
            }
            None => numerator,
        };

        let mut visibility = Visibility::plain(value, VisibilityUnit::StatuteMiles);
        match caps.get(1).map(|m| m.as_str()) {
            Some("P") => visibility.is_greater_than = true,
            Some("M") => visibility.is_less_than = true,
            _ => {}
        }
        return Ok(visibility);
    }

    Err(ComponentError::visibility(
        token,
        "does not match any visibility grammar",
    ))
}
