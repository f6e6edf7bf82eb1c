//! Report decoders
//!
//! The decoding entry points: [`decode`] takes one raw report string and
//! returns a structured [`Report`] or a fatal [`DecodeError`]. Report-type
//! selection honors an explicit leading keyword, then the configuration,
//! then falls back to detecting the TAF valid-period group.
//!
//! Decoding is synchronous, I/O-free, and referentially transparent: the
//! same input always produces a structurally equal report.

pub mod metar;
pub mod taf;

#[cfg(test)]
pub mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::app::models::Report;
use crate::app::services::grammar::{self, ComponentKind};
use crate::app::services::tokenizer::{self, RawToken};
use crate::config::{DecodeConfig, ForcedReportType};
use crate::error::Result;

/// Four-character ICAO station identifier
pub(super) static STATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]{3}$").expect("station pattern"));

/// Decode a raw METAR or TAF string with default configuration
pub fn decode(raw: &str) -> Result<Report> {
    decode_with(raw, &DecodeConfig::default())
}

/// Decode a raw METAR or TAF string
pub fn decode_with(raw: &str, config: &DecodeConfig) -> Result<Report> {
    let tokens = tokenizer::tokenize(raw)?;

    let report = if is_taf(&tokens, config) {
        debug!(tokens = tokens.len(), "decoding as TAF");
        Report::Taf(taf::decode_taf(raw, &tokens, config)?)
    } else {
        debug!(tokens = tokens.len(), "decoding as METAR");
        Report::Metar(metar::decode_metar(raw, &tokens, config)?)
    };

    Ok(report)
}

/// Decide which grammar applies to this token stream
fn is_taf(tokens: &[RawToken], config: &DecodeConfig) -> bool {
    match tokens.first().map(|t| t.text.as_str()) {
        Some("TAF") => return true,
        Some("METAR") | Some("SPECI") => return false,
        _ => {}
    }

    match config.report_type {
        Some(ForcedReportType::Taf) => true,
        Some(ForcedReportType::Metar) => false,
        // No keyword, no override: a TAF is recognizable by the DDHH/DDHH
        // valid-period group right after the station and issue time.
        None => tokens
            .iter()
            .take(4)
            .any(|t| grammar::classify(&t.text) == Some(ComponentKind::TimeRange)),
    }
}
