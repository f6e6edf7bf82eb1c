//! Report tokenizer
//!
//! Splits a raw report string into an ordered sequence of [`RawToken`]s.
//! Two normalization passes run on top of the plain whitespace split:
//!
//! - *Splitting*: some encoders glue change-group markers to neighboring
//!   groups (`28008KTFM061200`, `PROB30TEMPO`); these are re-separated so the
//!   dispatcher sees one group per token.
//! - *Recombination*: groups whose grammar spans multiple whitespace-delimited
//!   pieces (mixed-fraction statute-mile visibility, `1 1/2SM`) are merged
//!   into a single token.
//!
//! For a well-formed report, joining the produced tokens with single spaces
//! reproduces the whitespace-normalized input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DecodeError, Result};

/// One whitespace-delimited report group and its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    /// Zero-based index within the token sequence
    pub position: usize,
}

impl RawToken {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// Glued `FM` group with a preceding group attached (`...KTFM061200`)
static GLUED_BEFORE_FM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\S)FM(\d{4}(?:\d{2})?)\b").expect("glued FM pattern"));

/// Glued `FM` group with a following group attached (`FM061200BKN015`)
static GLUED_AFTER_FM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bFM(\d{6})([^\s\d]\S*)").expect("glued FM suffix pattern"));

/// `PROBnn` glued to the group that follows it (`PROB30TEMPO`)
static GLUED_PROB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bPROB(\d{2})([A-Z]\S*)").expect("glued PROB pattern"));

/// Change markers glued to a preceding group (`9999BECMG`)
static GLUED_CHANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\sA-Z])(BECMG|TEMPO|NOSIG)\b").expect("glued change pattern"));

/// Cloud groups glued to a preceding non-letter group (`9999FEW020`)
static GLUED_CLOUD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^\sA-Z])(FEW|SCT|BKN|OVC)(\d{3})").expect("glued cloud pattern")
});

/// Fraction-with-unit piece of a mixed-fraction visibility (`1/2SM`)
static VISIBILITY_FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}SM$").expect("visibility fraction pattern"));

/// Whole-number piece preceding a visibility fraction
static VISIBILITY_WHOLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}$").expect("visibility whole pattern"));

/// Split a raw report into ordered tokens.
///
/// Fails with [`DecodeError::EmptyReport`] when the input contains no tokens
/// after trimming.
pub fn tokenize(raw: &str) -> Result<Vec<RawToken>> {
    let normalized = split_glued_groups(raw.trim());

    let pieces: Vec<&str> = normalized.split_whitespace().collect();
    if pieces.is_empty() {
        return Err(DecodeError::EmptyReport);
    }

    Ok(recombine(&pieces))
}

/// Re-separate groups that an encoder glued together without whitespace
fn split_glued_groups(report: &str) -> String {
    let report = GLUED_BEFORE_FM.replace_all(report, "$1 FM$2");
    let report = GLUED_AFTER_FM.replace_all(&report, "FM$1 $2");
    let report = GLUED_PROB.replace_all(&report, "PROB$1 $2");
    let report = GLUED_CHANGE.replace_all(&report, "$1 $2");
    let report = GLUED_CLOUD.replace_all(&report, "$1 $2$3");
    report.into_owned()
}

/// Merge multi-piece groups into single tokens
fn recombine(pieces: &[&str]) -> Vec<RawToken> {
    let mut tokens = Vec::with_capacity(pieces.len());
    let mut position = 0;
    let mut i = 0;

    while i < pieces.len() {
        // Mixed-fraction statute-mile visibility: "1 1/2SM" is one group.
        if i + 1 < pieces.len()
            && VISIBILITY_WHOLE.is_match(pieces[i])
            && VISIBILITY_FRACTION.is_match(pieces[i + 1])
        {
            tokens.push(RawToken::new(
                format!("{} {}", pieces[i], pieces[i + 1]),
                position,
            ));
            position += 1;
            i += 2;
            continue;
        }

        tokens.push(RawToken::new(pieces[i], position));
        position += 1;
        i += 1;
    }

    tokens
}
