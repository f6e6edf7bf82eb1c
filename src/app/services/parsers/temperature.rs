//! Temperature group parsers
//!
//! Covers the METAR temperature/dewpoint group (`22/18`, `M03/M05`, `17/`)
//! and the TAF forecast temperature extremes (`TX28/0618Z`, `TNM02/0709Z`).
//! Sub-zero values use the `M` prefix marker, never a minus sign.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{DayHour, Temperature, TemperatureExtreme, TemperatureForecast};
use crate::error::ComponentError;

static TEMPERATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(M)?(\d{2})/(?:(M)?(\d{2}))?$").expect("temperature pattern"));

static FORECAST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^T([XN])(M)?(\d{2})/(\d{2})(\d{2})Z$").expect("forecast temperature pattern")
});

/// Parse a METAR temperature/dewpoint token
pub fn parse_temperature(token: &str) -> Result<Temperature, ComponentError> {
    let caps = TEMPERATURE
        .captures(token)
        .ok_or_else(|| ComponentError::temperature(token, "does not match the temperature grammar"))?;

    let temperature = signed_value(token, caps.get(1).is_some(), &caps[2])?;
    let dewpoint = match caps.get(4) {
        Some(value) => Some(signed_value(token, caps.get(3).is_some(), value.as_str())?),
        None => None,
    };

    Ok(Temperature {
        temperature,
        dewpoint,
    })
}

/// Parse a TAF `TX`/`TN` forecast temperature extreme
pub fn parse_temperature_forecast(token: &str) -> Result<TemperatureForecast, ComponentError> {
    let caps = FORECAST.captures(token).ok_or_else(|| {
        ComponentError::temperature(token, "does not match the forecast temperature grammar")
    })?;

    let kind = match &caps[1] {
        "X" => TemperatureExtreme::Maximum,
        _ => TemperatureExtreme::Minimum,
    };
    let value = signed_value(token, caps.get(2).is_some(), &caps[3])?;
    let day = parse_day(token, &caps[4])?;
    let hour = parse_hour(token, &caps[5])?;

    Ok(TemperatureForecast {
        kind,
        value,
        at: DayHour::new(day, hour),
    })
}

fn signed_value(token: &str, negative: bool, digits: &str) -> Result<i16, ComponentError> {
    let magnitude: i16 = digits
        .parse()
        .map_err(|_| ComponentError::temperature(token, format!("non-numeric value '{digits}'")))?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_day(token: &str, digits: &str) -> Result<u8, ComponentError> {
    let day: u8 = digits
        .parse()
        .map_err(|_| ComponentError::temperature(token, "non-numeric day"))?;
    if !(1..=31).contains(&day) {
        return Err(ComponentError::temperature(
            token,
            format!("day {day} out of range"),
        ));
    }
    Ok(day)
}

fn parse_hour(token: &str, digits: &str) -> Result<u8, ComponentError> {
    let hour: u8 = digits
        .parse()
        .map_err(|_| ComponentError::temperature(token, "non-numeric hour"))?;
    if hour > 24 {
        return Err(ComponentError::temperature(
            token,
            format!("hour {hour} out of range"),
        ));
    }
    Ok(hour)
}
