//! Data models for decoded METAR and TAF reports
//!
//! This module contains the strongly-typed output of the decoding engine.
//! Every value is constructed once during a single decode call and is
//! immutable thereafter; optional report groups are explicit `Option` fields
//! rather than sentinel values, so consumers must handle absence.

use crate::error::DecodeWarning;
use serde::Serialize;

// =============================================================================
// Time Groups
// =============================================================================

/// Observation or issue time decoded from a `DDHHMM Z` group.
///
/// Times are calendar-free day-of-month/hour/minute values; the decoder never
/// consults a wall clock, so decoding the same report twice yields
/// structurally equal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTime {
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

/// Hour/minute pair used by trend times, peak wind, and wind shifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourMinute {
    pub hour: u8,
    pub minute: u8,
}

/// Day-of-month plus hour, the resolution of TAF validity windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayHour {
    pub day: u8,
    pub hour: u8,
}

impl DayHour {
    pub fn new(day: u8, hour: u8) -> Self {
        Self { day, hour }
    }

    fn as_hours(self) -> u32 {
        u32::from(self.day) * 24 + u32::from(self.hour)
    }

    /// Ordering that tolerates month rollover. Validity windows span at most
    /// ~30 hours, so a day more than 15 days below the comparison point is
    /// taken to be in the following month.
    pub fn wrapping_ge(self, other: DayHour) -> bool {
        if self.day + 15 < other.day {
            return true;
        }
        if other.day + 15 < self.day {
            return false;
        }
        self.as_hours() >= other.as_hours()
    }

    pub fn wrapping_le(self, other: DayHour) -> bool {
        other.wrapping_ge(self)
    }
}

/// A TAF validity window `[start, end)` decoded from a `DDHH/DDHH` group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidPeriod {
    pub start: DayHour,
    pub end: DayHour,
}

impl ValidPeriod {
    pub fn new(start: DayHour, end: DayHour) -> Self {
        Self { start, end }
    }

    /// True when the end does not precede the start (month-rollover aware)
    pub fn is_well_ordered(&self) -> bool {
        self.end.wrapping_ge(self.start)
    }

    /// True when `other` lies entirely within this window
    pub fn contains(&self, other: &ValidPeriod) -> bool {
        other.start.wrapping_ge(self.start) && other.end.wrapping_le(self.end)
    }
}

// =============================================================================
// Report Header
// =============================================================================

/// Report-type keyword at the head of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportType {
    Metar,
    /// Special (off-schedule) observation
    Speci,
    Taf,
}

/// Amendment/correction modifier following the type keyword or station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportModifier {
    Amended,
    Corrected,
}

// =============================================================================
// Wind
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
}

impl SpeedUnit {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "KT" => Some(Self::Knots),
            "MPS" => Some(Self::MetersPerSecond),
            "KMH" => Some(Self::KilometersPerHour),
            _ => None,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Knots => "kt",
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindDirection {
    /// True direction in degrees, 010..=360
    Degrees(u16),
    /// `VRB`: direction varying by more than 60 degrees at low speed
    Variable,
}

/// A decoded wind group.
///
/// Invariant (enforced by the wind parser): `gust`, when present, exceeds
/// the sustained `speed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gust: Option<u16>,
    pub unit: SpeedUnit,
    /// Extreme-direction range from a following `dddVddd` token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_range: Option<(u16, u16)>,
    /// True for `P`/`ABV` prefixed speeds: actual speed exceeds the value
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub speed_exceeds: bool,
}

// =============================================================================
// Visibility
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisibilityUnit {
    Meters,
    StatuteMiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompassOctant {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CompassOctant {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::North),
            "NE" => Some(Self::Northeast),
            "E" => Some(Self::East),
            "SE" => Some(Self::Southeast),
            "S" => Some(Self::South),
            "SW" => Some(Self::Southwest),
            "W" => Some(Self::West),
            "NW" => Some(Self::Northwest),
            _ => None,
        }
    }
}

/// Directional minimum visibility reported alongside the prevailing value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionalVisibility {
    pub value: f64,
    pub direction: CompassOctant,
}

/// A decoded prevailing-visibility group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visibility {
    pub value: f64,
    pub unit: VisibilityUnit,
    /// Directional qualifier attached to the prevailing value (e.g. `4000NE`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<CompassOctant>,
    /// `P`-prefixed statute miles or 9999 meters: at least this value
    pub is_greater_than: bool,
    /// `M`-prefixed statute miles: less than this value
    pub is_less_than: bool,
    /// Ceiling And Visibility OK: implies 10 km or more
    pub is_cavok: bool,
    /// `NDV` suffix: the sensor cannot resolve directional variation
    pub no_directional_variation: bool,
    /// Secondary directional minimum (e.g. `2000 1200NW`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<DirectionalVisibility>,
}

impl Visibility {
    /// Plain prevailing visibility with no qualifiers
    pub fn plain(value: f64, unit: VisibilityUnit) -> Self {
        Self {
            value,
            unit,
            direction: None,
            is_greater_than: false,
            is_less_than: false,
            is_cavok: false,
            no_directional_variation: false,
            minimum: None,
        }
    }

    /// The fixed visibility value implied by CAVOK
    pub fn cavok() -> Self {
        Self {
            is_cavok: true,
            is_greater_than: true,
            ..Self::plain(f64::from(crate::constants::CAVOK_VISIBILITY_METERS), VisibilityUnit::Meters)
        }
    }
}

// =============================================================================
// Runway Groups
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RvrUnit {
    Meters,
    Feet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RvrTrend {
    Improving,
    Deteriorating,
    NoChange,
}

impl RvrTrend {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'U' => Some(Self::Improving),
            'D' => Some(Self::Deteriorating),
            'N' => Some(Self::NoChange),
            _ => None,
        }
    }
}

/// A decoded runway visual range group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunwayVisualRange {
    /// Runway designator, e.g. `04R`
    pub runway: String,
    pub visual_range: u16,
    pub unit: RvrUnit,
    /// `M` prefix: below the instrument's minimum
    pub is_less_than: bool,
    /// `P` prefix: above the instrument's maximum
    pub is_more_than: bool,
    /// High value of a varying range (`R28/0800V1200FT`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_range: Option<u16>,
    pub variable_less_than: bool,
    pub variable_more_than: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<RvrTrend>,
}

/// A decoded MOTNE runway state group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunwayState {
    pub runway: String,
    pub deposit: String,
    pub contamination: String,
    pub depth: String,
    pub braking: String,
    /// Original token, kept because downstream systems re-transmit it
    pub raw: String,
}

// =============================================================================
// Weather Phenomena
// =============================================================================

/// Reported intensity or proximity qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intensity {
    Light,
    Moderate,
    Heavy,
    /// `VC`: within 8 km of, but not at, the station
    Vicinity,
    /// `RE`: recent, since the previous report
    Recent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Descriptor {
    Shallow,
    Partial,
    Patches,
    LowDrifting,
    Blowing,
    Shower,
    Thunderstorm,
    Freezing,
}

impl Descriptor {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MI" => Some(Self::Shallow),
            "PR" => Some(Self::Partial),
            "BC" => Some(Self::Patches),
            "DR" => Some(Self::LowDrifting),
            "BL" => Some(Self::Blowing),
            "SH" => Some(Self::Shower),
            "TS" => Some(Self::Thunderstorm),
            "FZ" => Some(Self::Freezing),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Shallow => "shallow",
            Self::Partial => "partial",
            Self::Patches => "patches",
            Self::LowDrifting => "low drifting",
            Self::Blowing => "blowing",
            Self::Shower => "shower",
            Self::Thunderstorm => "thunderstorm",
            Self::Freezing => "freezing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phenomenon {
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    UnknownPrecipitation,
    Mist,
    Fog,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Haze,
    Spray,
    DustWhirls,
    Squalls,
    FunnelCloud,
    Sandstorm,
    Duststorm,
    /// `NSW`: explicit end of previously reported significant weather
    NoSignificantWeather,
}

impl Phenomenon {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DZ" => Some(Self::Drizzle),
            "RA" => Some(Self::Rain),
            "SN" => Some(Self::Snow),
            "SG" => Some(Self::SnowGrains),
            "IC" => Some(Self::IceCrystals),
            "PL" => Some(Self::IcePellets),
            "GR" => Some(Self::Hail),
            "GS" => Some(Self::SmallHail),
            "UP" => Some(Self::UnknownPrecipitation),
            "BR" => Some(Self::Mist),
            "FG" => Some(Self::Fog),
            "FU" => Some(Self::Smoke),
            "VA" => Some(Self::VolcanicAsh),
            "DU" => Some(Self::Dust),
            "SA" => Some(Self::Sand),
            "HZ" => Some(Self::Haze),
            "PY" => Some(Self::Spray),
            "PO" => Some(Self::DustWhirls),
            "SQ" => Some(Self::Squalls),
            "FC" => Some(Self::FunnelCloud),
            "SS" => Some(Self::Sandstorm),
            "DS" => Some(Self::Duststorm),
            "NSW" => Some(Self::NoSignificantWeather),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::SnowGrains => "snow grains",
            Self::IceCrystals => "ice crystals",
            Self::IcePellets => "ice pellets",
            Self::Hail => "hail",
            Self::SmallHail => "small hail",
            Self::UnknownPrecipitation => "unknown precipitation",
            Self::Mist => "mist",
            Self::Fog => "fog",
            Self::Smoke => "smoke",
            Self::VolcanicAsh => "volcanic ash",
            Self::Dust => "dust",
            Self::Sand => "sand",
            Self::Haze => "haze",
            Self::Spray => "spray",
            Self::DustWhirls => "dust whirls",
            Self::Squalls => "squalls",
            Self::FunnelCloud => "funnel cloud",
            Self::Sandstorm => "sandstorm",
            Self::Duststorm => "duststorm",
            Self::NoSignificantWeather => "no significant weather",
        }
    }
}

/// A decoded weather phenomena group.
///
/// Descriptor and phenomenon ordering follows the token: `-SHRA` is a light
/// shower of rain, and code order is semantically meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherPhenomenon {
    pub intensity: Intensity,
    pub descriptors: Vec<Descriptor>,
    pub phenomena: Vec<Phenomenon>,
}

impl WeatherPhenomenon {
    /// The `NSW` group
    pub fn no_significant_weather() -> Self {
        Self {
            intensity: Intensity::Moderate,
            descriptors: Vec::new(),
            phenomena: vec![Phenomenon::NoSignificantWeather],
        }
    }
}

// =============================================================================
// Sky Condition
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkyCover {
    /// `SKC` / `CLR`
    Clear,
    /// `FEW`: 1-2 oktas
    Few,
    /// `SCT`: 3-4 oktas
    Scattered,
    /// `BKN`: 5-7 oktas
    Broken,
    /// `OVC`: 8 oktas
    Overcast,
    /// `VV`: sky obscured, vertical visibility reported as the height
    VerticalVisibility,
    /// `NSC`: no cloud below 5000 ft and no convective cloud
    NoSignificantCloud,
    /// `NCD`: automated system detected no cloud
    NoCloudDetected,
    /// `///`: coverage not determinable by the automated system
    Unknown,
}

impl SkyCover {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SKC" | "CLR" => Some(Self::Clear),
            "FEW" => Some(Self::Few),
            "SCT" => Some(Self::Scattered),
            "BKN" => Some(Self::Broken),
            "OVC" => Some(Self::Overcast),
            "VV" => Some(Self::VerticalVisibility),
            "NSC" => Some(Self::NoSignificantCloud),
            "NCD" => Some(Self::NoCloudDetected),
            "///" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Convective cloud marker appended to a layer group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConvectiveType {
    Cumulonimbus,
    ToweringCumulus,
}

/// One reported cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkyLayer {
    pub cover: SkyCover,
    /// Height above ground in feet; `None` for clear-sky codes and `///`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_ft: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convective: Option<ConvectiveType>,
}

// =============================================================================
// Temperature and Pressure
// =============================================================================

/// Decoded temperature/dewpoint group. Sub-zero values are encoded with an
/// `M` prefix marker rather than a minus sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Temperature {
    pub temperature: i16,
    /// Absent when the report carries a trailing slash with no value (`17/`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dewpoint: Option<i16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureUnit {
    /// `Q`-prefixed QNH in whole hectopascals
    Hectopascals,
    /// `A`-prefixed altimeter in hundredths of inches of mercury
    InchesOfMercury,
}

/// Decoded altimeter/QNH group; the prefix letter determines the unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pressure {
    pub value: f64,
    pub unit: PressureUnit,
}

// =============================================================================
// Wind Shear
// =============================================================================

/// Flight phase a runway wind shear report applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindShearPhase {
    Takeoff,
    Landing,
}

/// A decoded `WS ...` wind shear group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WindShear {
    AllRunways,
    Runway {
        designator: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        phase: Option<WindShearPhase>,
    },
}

// =============================================================================
// METAR Trend
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendKind {
    /// `NOSIG`: no significant change expected within two hours
    NoSignificantChange,
    /// `BECMG`: gradual change expected
    Becoming,
    /// `TEMPO`: temporary fluctuations expected
    Temporary,
}

/// Time qualifiers inside a trend group (`FM1030`, `TL1130`, `AT1100`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TrendTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<HourMinute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<HourMinute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<HourMinute>,
}

impl TrendTime {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.until.is_none() && self.at.is_none()
    }
}

/// One changed condition inside a trend group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendChange {
    Wind(Wind),
    Visibility(Visibility),
    Weather(WeatherPhenomenon),
    Sky(SkyLayer),
    Cavok,
}

/// A trend clause appended to a METAR
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub kind: TrendKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TrendTime>,
    pub changes: Vec<TrendChange>,
    pub raw: String,
}

// =============================================================================
// Remarks
// =============================================================================

/// Inoperative-sensor codes reported by automated stations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SensorStatus {
    /// `PWINO`: present-weather identifier inoperative
    PresentWeatherIdentifier,
    /// `TSNO`: lightning detection system inoperative
    LightningDetection,
    /// `FZRANO`: freezing rain sensor inoperative
    FreezingRainSensor,
    /// `PNO`: precipitation amount sensor inoperative
    PrecipitationAmount,
    /// `VISNO`: secondary visibility sensor inoperative
    SecondaryVisibility,
    /// `CHINO`: secondary ceiling-height indicator inoperative
    SecondaryCeiling,
    /// `RVRNO`: RVR system inoperative
    RunwayVisualRange,
}

impl SensorStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PWINO" => Some(Self::PresentWeatherIdentifier),
            "TSNO" => Some(Self::LightningDetection),
            "FZRANO" => Some(Self::FreezingRainSensor),
            "PNO" => Some(Self::PrecipitationAmount),
            "VISNO" => Some(Self::SecondaryVisibility),
            "CHINO" => Some(Self::SecondaryCeiling),
            "RVRNO" => Some(Self::RunwayVisualRange),
            _ => None,
        }
    }
}

/// A single decoded entry from the remarks section.
///
/// Remarks decoding is best-effort: anything the remarks grammar does not
/// recognize is preserved verbatim as `FreeText`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RemarkEntry {
    /// `AO1`/`AO2` automated station indicator
    AutomatedStation { precipitation_discriminator: bool },
    /// `SLPxxx` sea-level pressure in hPa
    SeaLevelPressure { hpa: f64 },
    /// `SLPNO`: sea-level pressure not available
    SeaLevelPressureMissing,
    /// `TsTTTsTTT` hourly temperature/dewpoint to tenths of a degree
    PreciseTemperature {
        temperature: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        dewpoint: Option<f64>,
    },
    /// `5appp` three-hour pressure tendency
    PressureTendency { characteristic: u8, change_hpa: f64 },
    /// `Pxxxx` hourly precipitation in inches
    HourlyPrecipitation { inches: f64 },
    /// `6xxxx` three/six-hour precipitation in inches
    SixHourPrecipitation { inches: f64 },
    /// `1sTTT` six-hour maximum temperature
    SixHourMaxTemperature { celsius: f64 },
    /// `2sTTT` six-hour minimum temperature
    SixHourMinTemperature { celsius: f64 },
    /// `4sTTTsTTT` 24-hour temperature extremes
    TwentyFourHourTemperature { max_celsius: f64, min_celsius: f64 },
    /// `PK WND dddff(f)/(hh)mm`
    PeakWind {
        direction: u16,
        speed: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        hour: Option<u8>,
        minute: u8,
    },
    /// `WSHFT (hh)mm`
    WindShift {
        #[serde(skip_serializing_if = "Option::is_none")]
        hour: Option<u8>,
        minute: u8,
    },
    /// `PRESRR`: pressure rising rapidly
    PressureRisingRapidly,
    /// `PRESFR`: pressure falling rapidly
    PressureFallingRapidly,
    /// `FROPA`: frontal passage
    FrontalPassage,
    /// Inoperative-sensor code
    SensorStatus { sensor: SensorStatus },
    /// `$`: station needs maintenance
    MaintenanceRequired,
    /// Unrecognized remark token, preserved verbatim
    FreeText { text: String },
}

// =============================================================================
// TAF Forecast Periods
// =============================================================================

/// Forecast temperature extreme (`TXM02/0612Z`, `TN10/0709Z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemperatureForecast {
    pub kind: TemperatureExtreme,
    pub value: i16,
    pub at: DayHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemperatureExtreme {
    Maximum,
    Minimum,
}

/// Change-group kind introducing a forecast period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeKind {
    /// The prevailing conditions stated directly after the valid period
    Initial,
    /// `FM`: rapid change; the prevailing baseline is reset
    From,
    /// `BECMG`: gradual change; unspecified conditions are inherited
    Becoming,
    /// `TEMPO`: temporary fluctuation; unspecified conditions are inherited
    Temporary,
    /// `PROBnn [TEMPO]`: conditions with the stated probability
    Probability { percent: u8, tempo: bool },
}

/// One forecast period of a TAF: a validity window plus the complete set of
/// conditions applicable during that window (stated or inherited).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPeriod {
    pub kind: ChangeKind,
    /// Best-effort window; `None` only when the TAF itself carried no
    /// parsable valid period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<ValidPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<Wind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    pub weather: Vec<WeatherPhenomenon>,
    pub sky: Vec<SkyLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qnh: Option<Pressure>,
    pub temperatures: Vec<TemperatureForecast>,
}

impl ForecastPeriod {
    pub fn new(kind: ChangeKind) -> Self {
        Self {
            kind,
            window: None,
            wind: None,
            visibility: None,
            weather: Vec::new(),
            sky: Vec::new(),
            qnh: None,
            temperatures: Vec::new(),
        }
    }
}

// =============================================================================
// Reports
// =============================================================================

/// A decoded METAR observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetarReport {
    pub report_type: ReportType,
    /// Four-character ICAO station identifier
    pub station: String,
    pub observation_time: ReportTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<ReportModifier>,
    /// `AUTO`: fully automated observation
    pub is_automated: bool,
    /// `NIL`: the scheduled report is missing; all components absent
    pub is_nil: bool,
    /// `$` maintenance indicator seen anywhere in the report
    pub maintenance_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<Wind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    pub runway_visual_ranges: Vec<RunwayVisualRange>,
    pub runway_states: Vec<RunwayState>,
    pub weather: Vec<WeatherPhenomenon>,
    /// Cloud layers ordered non-decreasing by height
    pub sky: Vec<SkyLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altimeter: Option<Pressure>,
    pub wind_shear: Vec<WindShear>,
    pub trends: Vec<Trend>,
    /// NATO color-state codes, kept verbatim (`BLU`, `WHT`, ...)
    pub color_codes: Vec<String>,
    pub remarks: Vec<RemarkEntry>,
    pub warnings: Vec<DecodeWarning>,
}

/// A decoded TAF forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TafReport {
    /// Four-character ICAO station identifier
    pub station: String,
    pub issue_time: ReportTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<ReportModifier>,
    /// Overall validity span; `None` decodes with a warning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_period: Option<ValidPeriod>,
    /// Initial period followed by change-group periods, ordered by start
    pub periods: Vec<ForecastPeriod>,
    pub remarks: Vec<RemarkEntry>,
    pub warnings: Vec<DecodeWarning>,
}

/// The root decode output: one report of either kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Metar(MetarReport),
    Taf(TafReport),
}

impl Report {
    pub fn station(&self) -> &str {
        match self {
            Self::Metar(metar) => &metar.station,
            Self::Taf(taf) => &taf.station,
        }
    }

    pub fn warnings(&self) -> &[DecodeWarning] {
        match self {
            Self::Metar(metar) => &metar.warnings,
            Self::Taf(taf) => &taf.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_hour_ordering() {
        let start = DayHour::new(6, 18);
        let end = DayHour::new(7, 6);
        assert!(end.wrapping_ge(start));
        assert!(!start.wrapping_ge(end));
        assert!(start.wrapping_ge(start));
    }

    #[test]
    fn test_day_hour_month_rollover() {
        // A window running from the 31st into the 1st is well ordered.
        let start = DayHour::new(31, 18);
        let end = DayHour::new(1, 6);
        assert!(end.wrapping_ge(start));
        assert!(ValidPeriod::new(start, end).is_well_ordered());
    }

    #[test]
    fn test_valid_period_containment() {
        let span = ValidPeriod::new(DayHour::new(6, 18), DayHour::new(7, 24));
        let inner = ValidPeriod::new(DayHour::new(7, 0), DayHour::new(7, 2));
        let outside = ValidPeriod::new(DayHour::new(8, 0), DayHour::new(8, 2));
        assert!(span.contains(&inner));
        assert!(!span.contains(&outside));
    }

    #[test]
    fn test_phenomenon_code_round_trip() {
        for code in crate::constants::PHENOMENON_CODES {
            assert!(Phenomenon::from_code(code).is_some(), "missing {code}");
        }
        assert_eq!(Phenomenon::from_code("RA"), Some(Phenomenon::Rain));
        assert_eq!(Phenomenon::from_code("ZZ"), None);
    }

    #[test]
    fn test_descriptor_code_round_trip() {
        for code in crate::constants::DESCRIPTOR_CODES {
            assert!(Descriptor::from_code(code).is_some(), "missing {code}");
        }
    }

    #[test]
    fn test_sky_cover_codes() {
        assert_eq!(SkyCover::from_code("SKC"), Some(SkyCover::Clear));
        assert_eq!(SkyCover::from_code("CLR"), Some(SkyCover::Clear));
        assert_eq!(SkyCover::from_code("BKN"), Some(SkyCover::Broken));
        assert_eq!(SkyCover::from_code("///"), Some(SkyCover::Unknown));
        assert_eq!(SkyCover::from_code("XYZ"), None);
    }

    #[test]
    fn test_cavok_visibility() {
        let vis = Visibility::cavok();
        assert!(vis.is_cavok);
        assert!(vis.is_greater_than);
        assert_eq!(vis.value, 9999.0);
        assert_eq!(vis.unit, VisibilityUnit::Meters);
    }
}
