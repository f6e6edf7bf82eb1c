//! Error handling for METAR/TAF decoding.
//!
//! Two failure tiers exist. [`DecodeError`] is fatal: the decode call returns
//! no report at all. [`ComponentError`] is local to a single report group and
//! is surfaced as a [`DecodeWarning`] attached to an otherwise complete
//! report, reflecting that operational reports are frequently truncated or
//! carry non-standard trailing text.

use serde::Serialize;
use thiserror::Error;

/// Fatal decode errors. Only the two mandatory-group conditions abort a
/// decode call; every other failure degrades to a [`DecodeWarning`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty report: no tokens after trimming")]
    EmptyReport,

    #[error("missing mandatory {group} group in report '{report}'")]
    MissingMandatoryGroup { group: &'static str, report: String },
}

impl DecodeError {
    /// Create a missing-mandatory-group error with the offending input
    pub fn missing_group(group: &'static str, report: impl Into<String>) -> Self {
        Self::MissingMandatoryGroup {
            group,
            report: report.into(),
        }
    }
}

/// Component-level decode failures. A token matched a grammar rule but
/// failed semantic extraction, or (for `Unrecognized`) matched no rule.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentError {
    #[error("malformed wind group '{token}': {reason}")]
    Wind { token: String, reason: String },

    #[error("malformed visibility group '{token}': {reason}")]
    Visibility { token: String, reason: String },

    #[error("malformed runway visual range group '{token}': {reason}")]
    RunwayVisualRange { token: String, reason: String },

    #[error("malformed weather phenomenon group '{token}': {reason}")]
    Phenomenon { token: String, reason: String },

    #[error("malformed sky condition group '{token}': {reason}")]
    SkyCondition { token: String, reason: String },

    #[error("malformed temperature group '{token}': {reason}")]
    Temperature { token: String, reason: String },

    #[error("malformed altimeter group '{token}': {reason}")]
    Altimeter { token: String, reason: String },

    #[error("malformed trend group '{token}': {reason}")]
    Trend { token: String, reason: String },

    #[error("malformed wind shear group '{token}': {reason}")]
    WindShear { token: String, reason: String },

    #[error("forecast period ordering violation at '{token}': {reason}")]
    PeriodOrdering { token: String, reason: String },

    #[error("unrecognized token '{token}'")]
    Unrecognized { token: String },
}

impl ComponentError {
    pub fn wind(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Wind {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn visibility(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Visibility {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn rvr(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RunwayVisualRange {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn phenomenon(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Phenomenon {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn sky(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SkyCondition {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn temperature(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Temperature {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn altimeter(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Altimeter {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn trend(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Trend {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn wind_shear(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WindShear {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn period_ordering(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PeriodOrdering {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn unrecognized(token: impl Into<String>) -> Self {
        Self::Unrecognized {
            token: token.into(),
        }
    }

    /// The token text the failure refers to
    pub fn token(&self) -> &str {
        match self {
            Self::Wind { token, .. }
            | Self::Visibility { token, .. }
            | Self::RunwayVisualRange { token, .. }
            | Self::Phenomenon { token, .. }
            | Self::SkyCondition { token, .. }
            | Self::Temperature { token, .. }
            | Self::Altimeter { token, .. }
            | Self::Trend { token, .. }
            | Self::WindShear { token, .. }
            | Self::PeriodOrdering { token, .. }
            | Self::Unrecognized { token } => token,
        }
    }
}

/// A non-fatal decode warning: a component failure plus the position of the
/// offending token within the report body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeWarning {
    /// The component failure that produced this warning
    pub error: ComponentError,

    /// Zero-based token position within the whitespace-split report
    pub position: usize,
}

impl DecodeWarning {
    pub fn new(error: ComponentError, position: usize) -> Self {
        Self { error, position }
    }
}

impl std::fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "token {}: {}", self.position, self.error)
    }
}

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_group_display() {
        let err = DecodeError::missing_group("station identifier", "123456Z 28008KT");
        assert_eq!(
            err.to_string(),
            "missing mandatory station identifier group in report '123456Z 28008KT'"
        );
    }

    #[test]
    fn test_component_error_token_accessor() {
        let err = ComponentError::wind("28XXKT", "non-numeric speed");
        assert_eq!(err.token(), "28XXKT");

        let err = ComponentError::unrecognized("Q!@#");
        assert_eq!(err.token(), "Q!@#");
    }

    #[test]
    fn test_warning_display_includes_position() {
        let warning = DecodeWarning::new(ComponentError::unrecognized("XYZZY"), 4);
        assert_eq!(warning.to_string(), "token 4: unrecognized token 'XYZZY'");
    }
}
