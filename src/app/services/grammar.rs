//! Token grammar tables and dispatcher
//!
//! Classifies each body token against a priority-ordered set of pattern
//! rules. The table is immutable, compiled once on first use, and shared
//! read-only across arbitrarily many concurrent decode calls.
//!
//! Rule order is load-bearing: most specific patterns come first so that a
//! token never matches two kinds (a runway state group must not classify as
//! an RVR group, a `DDHH/DDHH` time range must not classify as a
//! temperature group). Classification is a pure function of the token text;
//! the only lookback rules (wind variable-direction ranges, wind shear token
//! runs) live in the assemblers that consume the classified stream.
//!
//! Station identifier, report time, and TAF valid-period groups are consumed
//! positionally by the assemblers before body dispatch and have no rules
//! here.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokenizer::RawToken;

/// Closed set of component kinds a body token can classify as.
///
/// Adding a kind is a compile-time-checked exhaustiveness change in every
/// assembler that matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// `RMK`: everything after belongs to the remarks grammar
    RemarksMarker,
    /// `NOSIG` / `BECMG` / `TEMPO`
    TrendMarker,
    /// `FMDDHHMM`: TAF rapid-change group marker
    FromGroup,
    /// `PROBnn`: TAF probability group marker
    Probability,
    /// `FM`/`TL`/`AT` + `HHMM` inside a METAR trend; a 4-digit `FM` token is
    /// also how old-style TAFs introduce a `DDHH` change point
    TrendTime,
    /// `DDHH/DDHH` validity window of a change group
    TimeRange,
    /// `AUTO` automation flag
    Auto,
    /// `COR` / `AMD`
    Modifier,
    /// `NIL` missing-report marker
    Nil,
    /// `$` maintenance indicator
    Maintenance,
    /// Wind group (direction/speed/gust/unit)
    Wind,
    /// `dddVddd` variable wind direction range
    WindVariability,
    /// Prevailing visibility in any of its encodings, including `CAVOK`
    Visibility,
    /// MOTNE runway state group
    RunwayState,
    /// Runway visual range group
    RunwayVisualRange,
    /// Weather phenomena group
    Phenomena,
    /// Cloud layer or clear-sky group
    Sky,
    /// Temperature/dewpoint group
    TemperatureDewpoint,
    /// `TX`/`TN` forecast temperature extreme (TAF)
    TemperatureForecast,
    /// Altimeter or QNH group
    Altimeter,
    /// `WS`-prefixed wind shear group (may span several tokens)
    WindShear,
    /// Military color code
    ColorCode,
}

/// A token paired with its classification; `None` means no rule matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub raw: RawToken,
    pub kind: Option<ComponentKind>,
}

struct GrammarRule {
    kind: ComponentKind,
    pattern: Regex,
}

impl GrammarRule {
    fn new(kind: ComponentKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("grammar rule pattern"),
        }
    }
}

/// The body grammar, most specific rule first.
static BODY_RULES: Lazy<Vec<GrammarRule>> = Lazy::new(|| {
    vec![
        GrammarRule::new(ComponentKind::RemarksMarker, r"^RMK$"),
        GrammarRule::new(
            ComponentKind::TrendMarker,
            &format!("^(?:{})$", crate::constants::TREND_MARKERS.join("|")),
        ),
        GrammarRule::new(ComponentKind::FromGroup, r"^FM\d{6}$"),
        GrammarRule::new(ComponentKind::Probability, r"^PROB\d{2}$"),
        GrammarRule::new(ComponentKind::TrendTime, r"^(?:FM|TL|AT)\d{4}$"),
        GrammarRule::new(ComponentKind::TimeRange, r"^\d{4}/\d{4}$"),
        GrammarRule::new(ComponentKind::Auto, r"^AUTO$"),
        GrammarRule::new(ComponentKind::Modifier, r"^(?:COR|AMD)$"),
        GrammarRule::new(ComponentKind::Nil, r"^NIL$"),
        GrammarRule::new(ComponentKind::Maintenance, r"^\$$"),
        // Wind: shape match on the unit suffix; strict field extraction is
        // the parser's job so malformed groups surface as wind warnings.
        GrammarRule::new(
            ComponentKind::Wind,
            r"^(?:P|ABV)?[A-Z0-9]{2,11}(?:KT|MPS|KMH)$",
        ),
        GrammarRule::new(ComponentKind::WindVariability, r"^\d{3}V\d{3}$"),
        // Runway state must precede RVR: both are R-prefixed slash groups.
        GrammarRule::new(
            ComponentKind::RunwayState,
            r"^R\d{2}[LCR]?/(?:\d|/)(?:\d|/)(?:\d{2}|//)(?:\d{2}|//)$",
        ),
        GrammarRule::new(
            ComponentKind::RunwayVisualRange,
            r"^R\d{2}[LCR]?/[PM]?\d{4}(?:V[PM]?\d{4})?(?:FT)?[UDN]?$",
        ),
        GrammarRule::new(
            ComponentKind::Visibility,
            r"^(?:CAVOK|\d{4}(?:N|NE|E|SE|S|SW|W|NW|NDV)?|[PM]?\d{1,2}(?:/\d{1,2})?SM|\d{1,2} \d{1,2}/\d{1,2}SM)$",
        ),
        GrammarRule::new(
            ComponentKind::TemperatureForecast,
            r"^T[XN]M?\d{2}/\d{4}Z$",
        ),
        GrammarRule::new(
            ComponentKind::TemperatureDewpoint,
            r"^M?\d{2}/(?:M?\d{2})?$",
        ),
        // Loose digit count so that over/under-long payloads surface as
        // altimeter warnings rather than unrecognized tokens.
        GrammarRule::new(ComponentKind::Altimeter, r"^(?:[AQ]|QNH)\d{2,6}(?:INS)?$"),
        GrammarRule::new(
            ComponentKind::Sky,
            r"^(?:SKC|CLR|NSC|NCD|(?:FEW|SCT|BKN|OVC|VV|///)(?:\d{3}|///)(?:CB|TCU|///)?)$",
        ),
        GrammarRule::new(
            ComponentKind::Phenomena,
            r"^(?:NSW|[+-]?(?:VC|RE)?(?:(?:MI|PR|BC|DR|BL|SH|TS|FZ)+(?:DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY|PO|SQ|FC|SS|DS)*|(?:DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY|PO|SQ|FC|SS|DS)+))$",
        ),
        GrammarRule::new(ComponentKind::WindShear, r"^WS(?:RWY)?(?:\d{2}[LCR]?)?$"),
        GrammarRule::new(
            ComponentKind::ColorCode,
            &format!("^(?:{})$", crate::constants::COLOR_CODES.join("|")),
        ),
    ]
});

/// Classify one token against the body grammar.
///
/// Deterministic and total: the same token text always yields the same
/// result, and at most one kind. `None` means unclassified; the assembler
/// decides whether that becomes an unparsed-group warning or remark text.
pub fn classify(token: &str) -> Option<ComponentKind> {
    BODY_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(token))
        .map(|rule| rule.kind)
}

/// Classify a full token stream, preserving order and positions
pub fn classify_all(tokens: &[RawToken]) -> Vec<ClassifiedToken> {
    tokens
        .iter()
        .map(|token| ClassifiedToken {
            kind: classify(&token.text),
            raw: token.clone(),
        })
        .collect()
}
