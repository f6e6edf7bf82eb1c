//! Wind group parser
//!
//! Handles the standard `dddss(Gss)UNIT` encoding, variable direction
//! (`VRB`), extreme speeds (`P99KT`, `ABV49MPS`), and the separate
//! `dddVddd` variable-direction-range token.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{SpeedUnit, Wind, WindDirection};
use crate::constants::MAX_WIND_DIRECTION;
use crate::error::ComponentError;

static WIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(P)?(\d{3}|VRB)(\d{2,3})(?:G(\d{2,3}))?(KT|MPS|KMH)$").expect("wind pattern")
});

static WIND_EXTREME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ABV(\d{2,3})(KT|MPS)$").expect("extreme wind pattern"));

static WIND_VARIABLE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})V(\d{3})$").expect("variable range pattern"));

/// Parse a wind group token into a [`Wind`] value.
///
/// Enforces the gust invariant: a gust value that does not exceed the
/// sustained speed is a parse failure, not a silently accepted report.
pub fn parse_wind(token: &str) -> Result<Wind, ComponentError> {
    // ABV-prefixed extreme winds carry no direction.
    if let Some(caps) = WIND_EXTREME.captures(token) {
        let speed = parse_speed(token, &caps[1])?;
        let unit = SpeedUnit::from_suffix(&caps[2])
            .ok_or_else(|| ComponentError::wind(token, "unknown speed unit"))?;
        return Ok(Wind {
            direction: WindDirection::Variable,
            speed,
            gust: None,
            unit,
            variable_range: None,
            speed_exceeds: true,
        });
    }

    let caps = WIND
        .captures(token)
        .ok_or_else(|| ComponentError::wind(token, "does not match the wind group grammar"))?;

    let speed_exceeds = caps.get(1).is_some();
    let direction = parse_direction(token, &caps[2])?;
    let speed = parse_speed(token, &caps[3])?;

    let gust = match caps.get(4) {
        Some(gust_match) => {
            let gust = parse_speed(token, gust_match.as_str())?;
            if gust <= speed {
                return Err(ComponentError::wind(
                    token,
                    format!("gust {gust} does not exceed sustained speed {speed}"),
                ));
            }
            Some(gust)
        }
        None => None,
    };

    let unit = SpeedUnit::from_suffix(&caps[5])
        .ok_or_else(|| ComponentError::wind(token, "unknown speed unit"))?;

    Ok(Wind {
        direction,
        speed,
        gust,
        unit,
        variable_range: None,
        speed_exceeds,
    })
}

/// Parse a `dddVddd` variable-direction-range token
pub fn parse_variable_range(token: &str) -> Result<(u16, u16), ComponentError> {
    let caps = WIND_VARIABLE_RANGE
        .captures(token)
        .ok_or_else(|| ComponentError::wind(token, "does not match the dddVddd grammar"))?;

    let from = parse_degrees(token, &caps[1])?;
    let to = parse_degrees(token, &caps[2])?;
    Ok((from, to))
}

fn parse_direction(token: &str, field: &str) -> Result<WindDirection, ComponentError> {
    if field == crate::constants::WIND_VARIABLE {
        return Ok(WindDirection::Variable);
    }
    Ok(WindDirection::Degrees(parse_degrees(token, field)?))
}

fn parse_degrees(token: &str, field: &str) -> Result<u16, ComponentError> {
    let degrees: u16 = field
        .parse()
        .map_err(|_| ComponentError::wind(token, format!("non-numeric direction '{field}'")))?;
    if degrees > MAX_WIND_DIRECTION {
        return Err(ComponentError::wind(
            token,
            format!("direction {degrees} exceeds {MAX_WIND_DIRECTION} degrees"),
        ));
    }
    Ok(degrees)
}

fn parse_speed(token: &str, field: &str) -> Result<u16, ComponentError> {
    field
        .parse()
        .map_err(|_| ComponentError::wind(token, format!("non-numeric speed '{field}'")))
}
