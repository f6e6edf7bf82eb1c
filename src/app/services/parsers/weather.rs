//! Weather phenomena parser
//!
//! Decomposes a phenomena group left to right: optional intensity or
//! proximity prefix, zero or more descriptor codes, zero or more phenomenon
//! codes. Code order is preserved because it is semantically meaningful
//! (`-SHRA` is a light shower of rain). A group with neither a descriptor
//! nor a phenomenon fails.

use crate::app::models::{Descriptor, Intensity, Phenomenon, WeatherPhenomenon};
use crate::constants::NO_SIGNIFICANT_WEATHER;
use crate::error::ComponentError;

/// Parse a weather phenomena token into a [`WeatherPhenomenon`] value
pub fn parse_phenomena(token: &str) -> Result<WeatherPhenomenon, ComponentError> {
    if token == NO_SIGNIFICANT_WEATHER {
        return Ok(WeatherPhenomenon::no_significant_weather());
    }

    let mut remaining = token;
    let mut intensity = Intensity::Moderate;

    if let Some(rest) = remaining.strip_prefix('+') {
        intensity = Intensity::Heavy;
        remaining = rest;
    } else if let Some(rest) = remaining.strip_prefix('-') {
        intensity = Intensity::Light;
        remaining = rest;
    }
    if let Some(rest) = remaining.strip_prefix("VC") {
        intensity = Intensity::Vicinity;
        remaining = rest;
    } else if let Some(rest) = remaining.strip_prefix("RE") {
        intensity = Intensity::Recent;
        remaining = rest;
    }

    let mut descriptors = Vec::new();
    while remaining.len() >= 2 {
        match Descriptor::from_code(&remaining[..2]) {
            Some(descriptor) => {
                descriptors.push(descriptor);
                remaining = &remaining[2..];
            }
            None => break,
        }
    }

    let mut phenomena = Vec::new();
    while remaining.len() >= 2 {
        match Phenomenon::from_code(&remaining[..2]) {
            Some(phenomenon) => {
                phenomena.push(phenomenon);
                remaining = &remaining[2..];
            }
            None => break,
        }
    }

    if !remaining.is_empty() {
        return Err(ComponentError::phenomenon(
            token,
            format!("unrecognized trailing code '{remaining}'"),
        ));
    }

    if descriptors.is_empty() && phenomena.is_empty() {
        return Err(ComponentError::phenomenon(
            token,
            "no descriptor or phenomenon codes present",
        ));
    }

    Ok(WeatherPhenomenon {
        intensity,
        descriptors,
        phenomena,
    })
}
