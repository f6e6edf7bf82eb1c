//! TAF report assembler
//!
//! Extracts the positional header groups (keyword, modifier, station, issue
//! time, valid period), then hands the classified body stream to the
//! forecast-period state machine. Station identifier and issue time are the
//! only mandatory groups; a missing valid period degrades to a warning and
//! periods keep their stated windows.

use tracing::debug;

use crate::app::models::{ReportModifier, TafReport};
use crate::app::services::grammar;
use crate::app::services::parsers::time;
use crate::app::services::period;
use crate::app::services::remarks;
use crate::app::services::tokenizer::RawToken;
use crate::config::DecodeConfig;
use crate::error::{ComponentError, DecodeError, DecodeWarning, Result};

/// Decode a tokenized TAF into a [`TafReport`]
pub fn decode_taf(raw: &str, tokens: &[RawToken], config: &DecodeConfig) -> Result<TafReport> {
    let mut i = 0;

    // ---- positional header -------------------------------------------------
    if tokens.first().map(|t| t.text.as_str()) == Some("TAF") {
        i += 1;
    }

    let mut modifier = None;
    if let Some(token) = tokens.get(i) {
        modifier = match token.text.as_str() {
            "AMD" => Some(ReportModifier::Amended),
            "COR" => Some(ReportModifier::Corrected),
            _ => None,
        };
        if modifier.is_some() {
            i += 1;
        }
    }

    let station = match tokens.get(i) {
        Some(token) if super::STATION.is_match(&token.text) => {
            i += 1;
            token.text.clone()
        }
        _ => return Err(DecodeError::missing_group("station identifier", raw)),
    };

    let issue_time = match tokens.get(i).and_then(|t| time::parse_report_time(&t.text)) {
        Some(parsed) => {
            i += 1;
            parsed
        }
        None => return Err(DecodeError::missing_group("issue time", raw)),
    };

    let mut warnings: Vec<DecodeWarning> = Vec::new();

    let valid_period = match tokens.get(i).and_then(|t| time::parse_valid_period(&t.text)) {
        Some(parsed) => {
            if !parsed.is_well_ordered() {
                warnings.push(DecodeWarning::new(
                    ComponentError::period_ordering(
                        &tokens[i].text,
                        "valid period ends before it starts",
                    ),
                    tokens[i].position,
                ));
            }
            i += 1;
            Some(parsed)
        }
        None => {
            warnings.push(DecodeWarning::new(
                ComponentError::period_ordering(
                    tokens.get(i).map_or("", |t| t.text.as_str()),
                    "TAF valid period missing or unparsable",
                ),
                tokens.get(i).map_or(0, |t| t.position),
            ));
            None
        }
    };

    // ---- body / remarks split ----------------------------------------------
    let rmk_index = tokens[i..]
        .iter()
        .position(|t| t.text == crate::constants::REMARKS_MARKER)
        .map(|offset| i + offset);

    let body = &tokens[i..rmk_index.unwrap_or(tokens.len())];
    let classified = grammar::classify_all(body);
    let periods = period::run(&classified, valid_period, &mut warnings);

    // ---- remarks -----------------------------------------------------------
    let mut remark_entries = Vec::new();
    if let Some(rmk_index) = rmk_index {
        if config.parse_remarks {
            let (entries, mut remark_warnings) = remarks::parse_remarks(&tokens[rmk_index + 1..]);
            remark_entries = entries;
            warnings.append(&mut remark_warnings);
        }
    }

    debug!(
        station = %station,
        periods = periods.len(),
        warnings = warnings.len(),
        "TAF decoded"
    );

    Ok(TafReport {
        station,
        issue_time,
        modifier,
        valid_period,
        periods,
        remarks: remark_entries,
        warnings,
    })
}
