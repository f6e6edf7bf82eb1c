//! Wind shear group parser
//!
//! ICAO wind shear groups span several tokens: `WS ALL RWY`, `WS RWY 24`,
//! `WS TKOF RWY 22L`, `WS LDG RWY 04R`. A less common combined single-token
//! form (`WSRWY26`, `WS26L`) also occurs. The METAR assembler collects the
//! token run; this parser extracts the typed value from it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{WindShear, WindShearPhase};
use crate::error::ComponentError;

static RUNWAY_DESIGNATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}[LCR]?$").expect("runway designator pattern"));

static COMBINED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^WS(?:RWY)?(\d{2}[LCR]?)$").expect("combined WS pattern"));

/// Tokens that may continue a `WS` group
pub fn continues_wind_shear(token: &str) -> bool {
    matches!(token, "ALL" | "RWY" | "TKOF" | "LDG") || RUNWAY_DESIGNATOR.is_match(token)
}

/// Parse a collected wind shear token run (first token is `WS`, or a
/// combined `WSxx` form on its own)
pub fn parse_wind_shear(tokens: &[&str]) -> Result<WindShear, ComponentError> {
    let raw = tokens.join(" ");

    if tokens.len() == 1 && tokens[0] != "WS" {
        let caps = COMBINED.captures(tokens[0]).ok_or_else(|| {
            ComponentError::wind_shear(&raw, "does not match the wind shear grammar")
        })?;
        return Ok(WindShear::Runway {
            designator: caps[1].to_string(),
            phase: None,
        });
    }

    if tokens.contains(&"ALL") {
        return Ok(WindShear::AllRunways);
    }

    let phase = if tokens.contains(&"TKOF") {
        Some(WindShearPhase::Takeoff)
    } else if tokens.contains(&"LDG") {
        Some(WindShearPhase::Landing)
    } else {
        None
    };

    let designator = tokens
        .iter()
        .find(|t| RUNWAY_DESIGNATOR.is_match(t))
        .ok_or_else(|| ComponentError::wind_shear(&raw, "no runway designator present"))?;

    Ok(WindShear::Runway {
        designator: (*designator).to_string(),
        phase,
    })
}
