//! Decoder configuration
//!
//! A small, validated configuration surface for the decoding engine. The CLI
//! maps its flags onto this; library callers can construct it directly.

use serde::{Deserialize, Serialize};

/// Force a report type when the leading keyword is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForcedReportType {
    Metar,
    Taf,
}

/// Configuration for a decode call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Report-type override for keyword-less inputs. `None` auto-detects
    /// from the token stream.
    pub report_type: Option<ForcedReportType>,

    /// Run the remarks pass over the section after `RMK`. When disabled the
    /// remarks tokens are dropped without warnings.
    pub parse_remarks: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            report_type: None,
            parse_remarks: true,
        }
    }
}

impl DecodeConfig {
    /// Configuration that skips the remarks pass
    pub fn without_remarks() -> Self {
        Self {
            parse_remarks: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parses_remarks() {
        let config = DecodeConfig::default();
        assert!(config.parse_remarks);
        assert_eq!(config.report_type, None);
    }

    #[test]
    fn test_without_remarks() {
        assert!(!DecodeConfig::without_remarks().parse_remarks);
    }
}
