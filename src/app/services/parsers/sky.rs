//! Sky condition parser
//!
//! Handles clear-sky codes (`SKC`, `CLR`, `NSC`, `NCD`), cloud layers with
//! three-digit heights in hundreds of feet, vertical visibility (`VV`),
//! `///` placeholders from automated stations, and `CB`/`TCU` convective
//! markers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::{ConvectiveType, SkyCover, SkyLayer};
use crate::constants::HEIGHT_GROUP_FEET;
use crate::error::ComponentError;

static LAYER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(FEW|SCT|BKN|OVC|VV|///)(\d{3}|///)(CB|TCU|///)?$").expect("sky layer pattern")
});

/// Parse a sky condition token into a [`SkyLayer`] value
pub fn parse_sky(token: &str) -> Result<SkyLayer, ComponentError> {
    // Clear-sky codes stand alone without a height group.
    if crate::constants::CLEAR_SKY_CODES.contains(&token) {
        let cover = SkyCover::from_code(token)
            .ok_or_else(|| ComponentError::sky(token, "unknown clear-sky code"))?;
        return Ok(SkyLayer {
            cover,
            height_ft: None,
            convective: None,
        });
    }

    let caps = LAYER
        .captures(token)
        .ok_or_else(|| ComponentError::sky(token, "does not match the sky condition grammar"))?;

    let cover = SkyCover::from_code(&caps[1])
        .ok_or_else(|| ComponentError::sky(token, "unknown coverage code"))?;

    // /// marks a height the automated system could not determine.
    let height_ft = if &caps[2] == "///" {
        None
    } else {
        let hundreds: u32 = caps[2]
            .parse()
            .map_err(|_| ComponentError::sky(token, "non-numeric height"))?;
        Some(hundreds * HEIGHT_GROUP_FEET)
    };

    let convective = match caps.get(3).map(|m| m.as_str()) {
        Some("CB") => Some(ConvectiveType::Cumulonimbus),
        Some("TCU") => Some(ConvectiveType::ToweringCumulus),
        _ => None,
    };

    Ok(SkyLayer {
        cover,
        height_ft,
        convective,
    })
}
