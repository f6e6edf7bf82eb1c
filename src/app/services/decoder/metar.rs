//! METAR report assembler
//!
//! Extracts the positional header groups (type keyword, station, observation
//! time, flags), then dispatches the body token-by-token through the grammar
//! into the component parsers. Station identifier and observation time are
//! the only mandatory groups; every other failure degrades to a warning with
//! the corresponding field left absent.

use tracing::debug;

use crate::app::models::{
    MetarReport, ReportModifier, ReportType, RemarkEntry,
};
use crate::app::services::grammar::{self, ComponentKind};
use crate::app::services::parsers::{
    pressure, runway, sky, temperature, trend, visibility, weather, wind, windshear,
};
use crate::app::services::remarks;
use crate::app::services::tokenizer::RawToken;
use crate::config::DecodeConfig;
use crate::error::{ComponentError, DecodeError, DecodeWarning, Result};

/// Decode a tokenized METAR into a [`MetarReport`]
pub fn decode_metar(
    raw: &str,
    tokens: &[RawToken],
    config: &DecodeConfig,
) -> Result<MetarReport> {
    let mut i = 0;

    // ---- positional header -------------------------------------------------
    let report_type = match tokens.first().map(|t| t.text.as_str()) {
        Some("METAR") => {
            i += 1;
            ReportType::Metar
        }
        Some("SPECI") => {
            i += 1;
            ReportType::Speci
        }
        _ => ReportType::Metar,
    };

    let mut modifier = parse_modifier(tokens.get(i).map(|t| t.text.as_str()));
    if modifier.is_some() {
        i += 1;
    }

    let station = match tokens.get(i) {
        Some(token) if super::STATION.is_match(&token.text) => {
            i += 1;
            token.text.clone()
        }
        _ => return Err(DecodeError::missing_group("station identifier", raw)),
    };

    let observation_time = match tokens
        .get(i)
        .and_then(|t| crate::app::services::parsers::time::parse_report_time(&t.text))
    {
        Some(time) => {
            i += 1;
            time
        }
        None => return Err(DecodeError::missing_group("observation time", raw)),
    };

    let mut report = MetarReport {
        report_type,
        station,
        observation_time,
        modifier: None,
        is_automated: false,
        is_nil: false,
        maintenance_required: false,
        wind: None,
        visibility: None,
        runway_visual_ranges: Vec::new(),
        runway_states: Vec::new(),
        weather: Vec::new(),
        sky: Vec::new(),
        temperature: None,
        altimeter: None,
        wind_shear: Vec::new(),
        trends: Vec::new(),
        color_codes: Vec::new(),
        remarks: Vec::new(),
        warnings: Vec::new(),
    };

    // Header flags can interleave: AUTO/COR/AMD after the time, NIL for a
    // missing report.
    while let Some(token) = tokens.get(i) {
        match token.text.as_str() {
            "AUTO" => report.is_automated = true,
            "COR" | "AMD" => modifier = parse_modifier(Some(token.text.as_str())),
            "NIL" => report.is_nil = true,
            _ => break,
        }
        i += 1;
    }
    report.modifier = modifier;

    // NIL ends the report: the scheduled observation is missing.
    if report.is_nil {
        debug!(station = %report.station, "NIL METAR");
        return Ok(report);
    }

    // ---- body / remarks split ----------------------------------------------
    let rmk_index = tokens[i..]
        .iter()
        .position(|t| t.text == crate::constants::REMARKS_MARKER)
        .map(|offset| i + offset);

    let body = &tokens[i..rmk_index.unwrap_or(tokens.len())];
    decode_body(body, &mut report);

    // Cloud layers are reported lowest to highest; enforce the ordering even
    // when the token stream disagrees.
    report
        .sky
        .sort_by_key(|layer| layer.height_ft.unwrap_or(0));

    // ---- remarks -----------------------------------------------------------
    if let Some(rmk_index) = rmk_index {
        if config.parse_remarks {
            let (entries, mut remark_warnings) = remarks::parse_remarks(&tokens[rmk_index + 1..]);
            if entries.contains(&RemarkEntry::MaintenanceRequired) {
                report.maintenance_required = true;
            }
            report.remarks = entries;
            report.warnings.append(&mut remark_warnings);
        }
    }

    debug!(
        station = %report.station,
        warnings = report.warnings.len(),
        "METAR decoded"
    );
    Ok(report)
}

fn parse_modifier(token: Option<&str>) -> Option<ReportModifier> {
    match token {
        Some("COR") => Some(ReportModifier::Corrected),
        Some("AMD") => Some(ReportModifier::Amended),
        _ => None,
    }
}

/// Dispatch the body tokens in order, accumulating components and warnings
fn decode_body(body: &[RawToken], report: &mut MetarReport) {
    let mut j = 0;

    while j < body.len() {
        let token = &body[j];
        let text = token.text.as_str();

        match grammar::classify(text) {
            Some(ComponentKind::Wind) => {
                if report.wind.is_some() {
                    warn_unrecognized(report, token);
                } else {
                    match wind::parse_wind(text) {
                        Ok(parsed) => report.wind = Some(parsed),
                        Err(error) => warn(report, error, token),
                    }
                }
            }
            // Lookback rule: dddVddd extends the wind group just parsed.
            Some(ComponentKind::WindVariability) => {
                if report.wind.is_none() {
                    warn_unrecognized(report, token);
                } else {
                    match wind::parse_variable_range(text) {
                        Ok(range) => {
                            if let Some(parsed) = report.wind.as_mut() {
                                parsed.variable_range = Some(range);
                            }
                        }
                        Err(error) => warn(report, error, token),
                    }
                }
            }
            Some(ComponentKind::Visibility) => match visibility::parse_visibility(text) {
                Ok(parsed) => {
                    // Lookback rule: a second, direction-qualified value is
                    // the directional minimum of the prevailing visibility.
                    let folds_as_minimum = parsed.direction.is_some()
                        && report
                            .visibility
                            .as_ref()
                            .is_some_and(|v| v.minimum.is_none());
                    if report.visibility.is_none() {
                        report.visibility = Some(parsed);
                    } else if folds_as_minimum {
                        let minimum = parsed.direction.map(|direction| {
                            crate::app::models::DirectionalVisibility {
                                value: parsed.value,
                                direction,
                            }
                        });
                        if let Some(prevailing) = report.visibility.as_mut() {
                            prevailing.minimum = minimum;
                        }
                    } else {
                        warn_unrecognized(report, token);
                    }
                }
                Err(error) => warn(report, error, token),
            },
            Some(ComponentKind::RunwayState) => match runway::parse_runway_state(text) {
                Ok(state) => report.runway_states.push(state),
                Err(error) => warn(report, error, token),
            },
            Some(ComponentKind::RunwayVisualRange) => match runway::parse_rvr(text) {
                Ok(rvr) => report.runway_visual_ranges.push(rvr),
                Err(error) => warn(report, error, token),
            },
            Some(ComponentKind::Phenomena) => match weather::parse_phenomena(text) {
                Ok(wx) => report.weather.push(wx),
                Err(error) => warn(report, error, token),
            },
            Some(ComponentKind::Sky) => match sky::parse_sky(text) {
                Ok(layer) => report.sky.push(layer),
                Err(error) => warn(report, error, token),
            },
            Some(ComponentKind::TemperatureDewpoint) => {
                if report.temperature.is_some() {
                    warn_unrecognized(report, token);
                } else {
                    match temperature::parse_temperature(text) {
                        Ok(parsed) => report.temperature = Some(parsed),
                        Err(error) => warn(report, error, token),
                    }
                }
            }
            Some(ComponentKind::Altimeter) => {
                if report.altimeter.is_some() {
                    warn_unrecognized(report, token);
                } else {
                    match pressure::parse_altimeter(text) {
                        Ok(parsed) => report.altimeter = Some(parsed),
                        Err(error) => warn(report, error, token),
                    }
                }
            }
            Some(ComponentKind::WindShear) => {
                // Collect the full multi-token group before parsing.
                let mut run: Vec<&str> = vec![text];
                while j + 1 < body.len() && windshear::continues_wind_shear(&body[j + 1].text) {
                    j += 1;
                    run.push(body[j].text.as_str());
                }
                match windshear::parse_wind_shear(&run) {
                    Ok(shear) => report.wind_shear.push(shear),
                    Err(error) => warn(report, error, token),
                }
            }
            Some(ComponentKind::TrendMarker) => {
                // The rest of the body up to the next marker belongs to this
                // trend clause.
                let marker = text;
                let mut elements: Vec<&str> = Vec::new();
                while j + 1 < body.len()
                    && grammar::classify(&body[j + 1].text) != Some(ComponentKind::TrendMarker)
                {
                    j += 1;
                    elements.push(body[j].text.as_str());
                }
                match trend::parse_trend(marker, &elements) {
                    Ok(parsed) => report.trends.push(parsed),
                    Err(error) => warn(report, error, token),
                }
            }
            Some(ComponentKind::ColorCode) => report.color_codes.push(text.to_string()),
            Some(ComponentKind::Maintenance) => report.maintenance_required = true,
            Some(ComponentKind::Auto) => report.is_automated = true,
            Some(ComponentKind::Modifier) => {
                report.modifier = parse_modifier(Some(text));
            }
            Some(ComponentKind::Nil) => {
                report.is_nil = true;
                break;
            }
            // TAF-only groups and stray markers carry no meaning in a METAR
            // body; so does anything the grammar cannot classify.
            Some(
                ComponentKind::TimeRange
                | ComponentKind::FromGroup
                | ComponentKind::Probability
                | ComponentKind::TrendTime
                | ComponentKind::TemperatureForecast
                | ComponentKind::RemarksMarker,
            )
            | None => warn_unrecognized(report, token),
        }
        j += 1;
    }
}

fn warn(report: &mut MetarReport, error: ComponentError, token: &RawToken) {
    report
        .warnings
        .push(DecodeWarning::new(error, token.position));
}

fn warn_unrecognized(report: &mut MetarReport, token: &RawToken) {
    warn(report, ComponentError::unrecognized(&token.text), token);
}
