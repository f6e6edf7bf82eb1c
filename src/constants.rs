//! Application constants for the METAR/TAF decoder
//!
//! This module contains the ICAO code vocabularies, unit conversion factors,
//! and default values used throughout the decoding engine. All tables are
//! immutable and shared read-only across concurrent decode calls.

// =============================================================================
// Report Keywords and Markers
// =============================================================================

/// Marker introducing the remarks section
pub const REMARKS_MARKER: &str = "RMK";

// =============================================================================
// Wind and Visibility
// =============================================================================

/// Variable wind direction code
pub const WIND_VARIABLE: &str = "VRB";

/// Maximum encodable wind direction in degrees
pub const MAX_WIND_DIRECTION: u16 = 360;

/// Visibility value reported for CAVOK and for "10 km or more"
pub const CAVOK_VISIBILITY_METERS: u32 = 9999;

// =============================================================================
// Weather Phenomena Vocabulary
// =============================================================================

/// Two-letter descriptor codes, in the order the grammar scans them
pub const DESCRIPTOR_CODES: &[&str] = &["MI", "PR", "BC", "DR", "BL", "SH", "TS", "FZ"];

/// Two-letter phenomenon codes, in the order the grammar scans them
pub const PHENOMENON_CODES: &[&str] = &[
    "DZ", "RA", "SN", "SG", "IC", "PL", "GR", "GS", "UP", "BR", "FG", "FU", "VA", "DU", "SA", "HZ",
    "PY", "PO", "SQ", "FC", "SS", "DS",
];

/// No-significant-weather code (TAF change groups and METAR trends)
pub const NO_SIGNIFICANT_WEATHER: &str = "NSW";

// =============================================================================
// Sky Condition Vocabulary
// =============================================================================

/// Coverage codes that stand alone without a height group
pub const CLEAR_SKY_CODES: &[&str] = &["SKC", "CLR", "NSC", "NCD"];

/// Feet per height-group unit (heights are encoded in hundreds of feet)
pub const HEIGHT_GROUP_FEET: u32 = 100;

// =============================================================================
// Trend and Change-Group Vocabulary
// =============================================================================

/// Trend markers appended to METAR reports
pub const TREND_MARKERS: &[&str] = &["NOSIG", "BECMG", "TEMPO"];

/// Military color codes occasionally appended to NATO-station reports
pub const COLOR_CODES: &[&str] = &["BLU", "WHT", "GRN", "YLO", "AMB", "RED"];

// =============================================================================
// Remarks Vocabulary
// =============================================================================

/// Sensor-status codes reported when an automated sensor is inoperative
pub const SENSOR_STATUS_CODES: &[&str] = &[
    "PWINO", "TSNO", "FZRANO", "PNO", "VISNO", "CHINO", "RVRNO",
];

// =============================================================================
// Runway State Decoding (MOTNE format)
// =============================================================================

/// Decode the deposit digit of a MOTNE runway state group
pub fn runway_deposit_description(code: char) -> &'static str {
    match code {
        '0' => "clear and dry",
        '1' => "damp",
        '2' => "wet or water patches",
        '3' => "rime or frost covered",
        '4' => "dry snow",
        '5' => "wet snow",
        '6' => "slush",
        '7' => "ice",
        '8' => "compacted or rolled snow",
        '9' => "frozen ruts or ridges",
        '/' => "not reported",
        _ => "unknown deposit",
    }
}

/// Decode the contamination-extent digit of a MOTNE runway state group
pub fn runway_extent_description(code: char) -> &'static str {
    match code {
        '1' => "10% or less",
        '2' => "11% to 25%",
        '5' => "26% to 50%",
        '9' => "51% to 100%",
        '/' => "not reported",
        _ => "unknown extent",
    }
}

/// Decode the two-digit depth field of a MOTNE runway state group
pub fn runway_depth_description(raw: &str) -> String {
    if raw == "//" {
        return "not reported".to_string();
    }
    let Ok(value) = raw.parse::<u8>() else {
        return format!("unknown ({raw})");
    };
    match value {
        0 => "less than 1mm".to_string(),
        1..=90 => format!("{value}mm"),
        92 => "10cm".to_string(),
        93 => "15cm".to_string(),
        94 => "20cm".to_string(),
        95 => "25cm".to_string(),
        96 => "30cm".to_string(),
        97 => "35cm".to_string(),
        98 => "40cm or more".to_string(),
        99 => "runway not operational".to_string(),
        _ => format!("unknown ({raw})"),
    }
}

/// Decode the two-digit braking field of a MOTNE runway state group
pub fn runway_braking_description(raw: &str) -> String {
    match raw {
        "//" => "not reported".to_string(),
        "91" => "poor".to_string(),
        "92" => "medium/poor".to_string(),
        "93" => "medium".to_string(),
        "94" => "medium/good".to_string(),
        "95" => "good".to_string(),
        "99" => "unreliable or unmeasurable".to_string(),
        _ => match raw.parse::<u8>() {
            Ok(coef) if (1..=90).contains(&coef) => {
                format!("coefficient {:.2}", f64::from(coef) / 100.0)
            }
            _ => format!("unknown ({raw})"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runway_deposit_descriptions() {
        assert_eq!(runway_deposit_description('0'), "clear and dry");
        assert_eq!(runway_deposit_description('7'), "ice");
        assert_eq!(runway_deposit_description('/'), "not reported");
        assert_eq!(runway_deposit_description('X'), "unknown deposit");
    }

    #[test]
    fn test_runway_depth_descriptions() {
        assert_eq!(runway_depth_description("//"), "not reported");
        assert_eq!(runway_depth_description("00"), "less than 1mm");
        assert_eq!(runway_depth_description("45"), "45mm");
        assert_eq!(runway_depth_description("92"), "10cm");
        assert_eq!(runway_depth_description("99"), "runway not operational");
    }

    #[test]
    fn test_runway_braking_descriptions() {
        assert_eq!(runway_braking_description("95"), "good");
        assert_eq!(runway_braking_description("91"), "poor");
        assert_eq!(runway_braking_description("56"), "coefficient 0.56");
        assert_eq!(runway_braking_description("//"), "not reported");
    }

    #[test]
    fn test_vocabulary_tables_are_disjoint() {
        // A descriptor code must never double as a phenomenon code; the
        // phenomena parser relies on this when scanning left to right.
        for descriptor in DESCRIPTOR_CODES {
            assert!(!PHENOMENON_CODES.contains(descriptor));
        }
    }
}
