//! METAR trend clause parser
//!
//! A trend is a shorthand two-hour forecast appended to a METAR: `NOSIG`,
//! or `BECMG`/`TEMPO` followed by time qualifiers and abbreviated changed
//! conditions. The changed conditions reuse the body grammar and the same
//! component parsers as the main report; tokens inside a trend that decode
//! to nothing stay in the raw clause without failing the trend.

use crate::app::models::{Trend, TrendChange, TrendKind, TrendTime};
use crate::app::services::grammar::{self, ComponentKind};
use crate::error::ComponentError;

use super::{sky, time, visibility, weather, wind};

/// Map a trend marker token to its kind
pub fn trend_kind(marker: &str) -> Option<TrendKind> {
    match marker {
        "NOSIG" => Some(TrendKind::NoSignificantChange),
        "BECMG" => Some(TrendKind::Becoming),
        "TEMPO" => Some(TrendKind::Temporary),
        _ => None,
    }
}

/// Parse a trend marker plus its collected element tokens
pub fn parse_trend(marker: &str, elements: &[&str]) -> Result<Trend, ComponentError> {
    let kind = trend_kind(marker)
        .ok_or_else(|| ComponentError::trend(marker, "unknown trend marker"))?;

    let raw = if elements.is_empty() {
        marker.to_string()
    } else {
        format!("{} {}", marker, elements.join(" "))
    };

    if kind == TrendKind::NoSignificantChange {
        return Ok(Trend {
            kind,
            time: None,
            changes: Vec::new(),
            raw,
        });
    }

    let mut trend_time = TrendTime::default();
    let mut changes = Vec::new();

    for element in elements {
        match grammar::classify(element) {
            Some(ComponentKind::TrendTime) => {
                if let Some((which, at)) = time::parse_trend_time(element) {
                    match which {
                        time::TrendTimeKind::From => trend_time.from = Some(at),
                        time::TrendTimeKind::Until => trend_time.until = Some(at),
                        time::TrendTimeKind::At => trend_time.at = Some(at),
                    }
                }
            }
            Some(ComponentKind::Wind) => {
                if let Ok(wind) = wind::parse_wind(element) {
                    changes.push(TrendChange::Wind(wind));
                }
            }
            Some(ComponentKind::Visibility) => {
                if *element == "CAVOK" {
                    changes.push(TrendChange::Cavok);
                } else if let Ok(vis) = visibility::parse_visibility(element) {
                    changes.push(TrendChange::Visibility(vis));
                }
            }
            Some(ComponentKind::Phenomena) => {
                if let Ok(wx) = weather::parse_phenomena(element) {
                    changes.push(TrendChange::Weather(wx));
                }
            }
            Some(ComponentKind::Sky) => {
                if let Ok(layer) = sky::parse_sky(element) {
                    changes.push(TrendChange::Sky(layer));
                }
            }
            // Anything else stays in the raw clause.
            _ => {}
        }
    }

    Ok(Trend {
        kind,
        time: (!trend_time.is_empty()).then_some(trend_time),
        changes,
        raw,
    })
}
