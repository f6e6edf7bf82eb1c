//! Forecast period state machine for TAF decoding
//!
//! Consumes the classified token stream following the valid-period group and
//! partitions it into an initial period plus a sequence of change-group
//! periods. The machine is explicit: an enumerated state, a current-period
//! accumulator, and a single transition rule — a change-group marker closes
//! the previous period and opens the next.
//!
//! Inheritance is a property of the period kind. `FM` marks a rapid, complete
//! change of the prevailing conditions, so nothing is inherited; `BECMG`,
//! `TEMPO`, and `PROB` describe deviations, so each component they leave
//! unspecified is inherited from the nearest preceding period in the
//! sequence, regardless of that period's kind.
//!
//! Window violations (end before start, or a change group outside the
//! enclosing span) are warnings, never fatal: the period is kept with its
//! stated best-effort window and flagged.

use tracing::debug;

use crate::app::models::{ChangeKind, DayHour, ForecastPeriod, ValidPeriod};
use crate::app::services::grammar::{ClassifiedToken, ComponentKind};
use crate::app::services::parsers::{pressure, sky, temperature, time, visibility, weather, wind};
use crate::app::services::tokenizer::RawToken;
use crate::error::{ComponentError, DecodeWarning};

/// Machine state: before any change group, inside one, or exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    InPeriod(ChangeKind),
    Done,
}

/// Partition a classified TAF body into forecast periods.
///
/// `overall` is the TAF's own valid period; it bounds every change-group
/// window and closes open-ended `FM` windows.
pub fn run(
    tokens: &[ClassifiedToken],
    overall: Option<ValidPeriod>,
    warnings: &mut Vec<DecodeWarning>,
) -> Vec<ForecastPeriod> {
    let mut machine = PeriodStateMachine {
        overall,
        state: State::Initial,
        current: initial_period(overall),
        completed: Vec::new(),
        warnings,
    };

    for token in tokens {
        machine.step(&token.raw, token.kind);
    }
    machine.finish()
}

fn initial_period(overall: Option<ValidPeriod>) -> ForecastPeriod {
    let mut period = ForecastPeriod::new(ChangeKind::Initial);
    period.window = overall;
    period
}

struct PeriodStateMachine<'a> {
    overall: Option<ValidPeriod>,
    state: State,
    current: ForecastPeriod,
    completed: Vec<ForecastPeriod>,
    warnings: &'a mut Vec<DecodeWarning>,
}

impl PeriodStateMachine<'_> {
    fn step(&mut self, token: &RawToken, kind: Option<ComponentKind>) {
        debug_assert!(self.state != State::Done);

        match kind {
            // ---- transitions -------------------------------------------------
            Some(ComponentKind::FromGroup) => {
                let start = time::parse_fm_time(&token.text);
                self.open_from_period(token, start);
            }
            // A four-digit FM token at period level is the old-style DDHH
            // change point; TL/AT have no meaning here.
            Some(ComponentKind::TrendTime) if token.text.starts_with("FM") => {
                let start = time::parse_fm_day_hour(&token.text);
                self.open_from_period(token, start);
            }
            Some(ComponentKind::TrendMarker) if token.text == "BECMG" => {
                self.open_period(ChangeKind::Becoming);
            }
            Some(ComponentKind::TrendMarker) if token.text == "TEMPO" => {
                // PROB30 TEMPO is one combined period, not two.
                if let ChangeKind::Probability { percent, tempo: false } = self.current.kind {
                    if self.state == State::InPeriod(self.current.kind)
                        && self.period_is_untouched()
                    {
                        self.current.kind = ChangeKind::Probability {
                            percent,
                            tempo: true,
                        };
                        self.state = State::InPeriod(self.current.kind);
                        return;
                    }
                }
                self.open_period(ChangeKind::Temporary);
            }
            Some(ComponentKind::Probability) => {
                let percent: u8 = token.text[4..].parse().unwrap_or(0);
                self.open_period(ChangeKind::Probability {
                    percent,
                    tempo: false,
                });
            }

            // ---- window of the current change group --------------------------
            Some(ComponentKind::TimeRange) => self.set_window(token),

            // ---- components accumulating into the current period -------------
            Some(ComponentKind::Wind) => {
                if self.current.wind.is_some() {
                    self.warn_unrecognized(token);
                } else {
                    match wind::parse_wind(&token.text) {
                        Ok(wind) => self.current.wind = Some(wind),
                        Err(error) => self.warn(error, token),
                    }
                }
            }
            Some(ComponentKind::WindVariability) => {
                if self.current.wind.is_none() {
                    self.warn_unrecognized(token);
                } else {
                    match wind::parse_variable_range(&token.text) {
                        Ok(range) => {
                            if let Some(wind) = self.current.wind.as_mut() {
                                wind.variable_range = Some(range);
                            }
                        }
                        Err(error) => self.warn(error, token),
                    }
                }
            }
            Some(ComponentKind::Visibility) => {
                if self.current.visibility.is_some() {
                    self.warn_unrecognized(token);
                } else {
                    match visibility::parse_visibility(&token.text) {
                        Ok(vis) => self.current.visibility = Some(vis),
                        Err(error) => self.warn(error, token),
                    }
                }
            }
            Some(ComponentKind::Phenomena) => match weather::parse_phenomena(&token.text) {
                Ok(wx) => self.current.weather.push(wx),
                Err(error) => self.warn(error, token),
            },
            Some(ComponentKind::Sky) => match sky::parse_sky(&token.text) {
                Ok(layer) => self.current.sky.push(layer),
                Err(error) => self.warn(error, token),
            },
            Some(ComponentKind::Altimeter) => match pressure::parse_qnh(&token.text) {
                Ok(qnh) => self.current.qnh = Some(qnh),
                Err(error) => self.warn(error, token),
            },
            Some(ComponentKind::TemperatureForecast) => {
                match temperature::parse_temperature_forecast(&token.text) {
                    Ok(forecast) => self.current.temperatures.push(forecast),
                    Err(error) => self.warn(error, token),
                }
            }

            // Everything else has no meaning inside a TAF body.
            _ => self.warn_unrecognized(token),
        }
    }

    /// Close the current period and return the full ordered sequence
    fn finish(mut self) -> Vec<ForecastPeriod> {
        self.close_current();
        self.state = State::Done;

        self.fix_prevailing_windows();
        self.validate_windows();

        debug!(periods = self.completed.len(), "forecast periods assembled");
        self.completed
    }

    fn open_from_period(&mut self, token: &RawToken, start: Option<DayHour>) {
        self.close_current();

        let mut period = ForecastPeriod::new(ChangeKind::From);
        match start {
            Some(start) => {
                // Open-ended until the next FM group or the overall valid-to.
                let end = self.overall.map_or(start, |overall| overall.end);
                period.window = Some(ValidPeriod::new(start, end));
            }
            None => self.warn(
                ComponentError::period_ordering(&token.text, "unparsable FM change point"),
                token,
            ),
        }
        self.current = period;
        self.state = State::InPeriod(ChangeKind::From);
    }

    fn open_period(&mut self, kind: ChangeKind) {
        self.close_current();
        self.current = ForecastPeriod::new(kind);
        self.state = State::InPeriod(kind);
    }

    /// Attach a `DDHH/DDHH` window to the current change group
    fn set_window(&mut self, token: &RawToken) {
        let expects_window = matches!(
            self.current.kind,
            ChangeKind::Becoming | ChangeKind::Temporary | ChangeKind::Probability { .. }
        );
        if !expects_window || self.current.window.is_some() {
            self.warn_unrecognized(token);
            return;
        }

        match time::parse_valid_period(&token.text) {
            Some(window) => {
                if !window.is_well_ordered() {
                    self.warn(
                        ComponentError::period_ordering(&token.text, "window ends before it starts"),
                        token,
                    );
                }
                // Kept even when ill-ordered: best-effort window, flagged.
                self.current.window = Some(window);
            }
            None => self.warn(
                ComponentError::period_ordering(&token.text, "unparsable change-group window"),
                token,
            ),
        }
    }

    fn close_current(&mut self) {
        let mut period = std::mem::replace(&mut self.current, ForecastPeriod::new(ChangeKind::Initial));

        // A TAF whose body opens directly with a change group has no initial
        // period to report.
        if period.kind == ChangeKind::Initial && period_states_nothing(&period) {
            return;
        }

        // Inheriting kinds take each unspecified component from the nearest
        // preceding period; FM resets the baseline instead.
        if matches!(
            period.kind,
            ChangeKind::Becoming | ChangeKind::Temporary | ChangeKind::Probability { .. }
        ) {
            if period.window.is_none() {
                period.window = self.overall;
            }
            if let Some(previous) = self.completed.last() {
                if period.wind.is_none() {
                    period.wind = previous.wind;
                }
                if period.visibility.is_none() {
                    period.visibility = previous.visibility.clone();
                }
                if period.weather.is_empty() {
                    period.weather = previous.weather.clone();
                }
                if period.sky.is_empty() {
                    period.sky = previous.sky.clone();
                }
                if period.qnh.is_none() {
                    period.qnh = previous.qnh;
                }
            }
        }

        self.completed.push(period);
    }

    fn period_is_untouched(&self) -> bool {
        self.current.window.is_none()
            && self.current.wind.is_none()
            && self.current.visibility.is_none()
            && self.current.weather.is_empty()
            && self.current.sky.is_empty()
    }

    /// Prevailing periods (INITIAL and FM) run until the next prevailing
    /// period begins; the final one closes at the overall valid-to time.
    fn fix_prevailing_windows(&mut self) {
        let next_starts: Vec<Option<DayHour>> = (0..self.completed.len())
            .map(|i| {
                self.completed[i + 1..]
                    .iter()
                    .find(|p| p.kind == ChangeKind::From)
                    .and_then(|p| p.window.map(|w| w.start))
            })
            .collect();

        for (period, next_start) in self.completed.iter_mut().zip(next_starts) {
            if !matches!(period.kind, ChangeKind::Initial | ChangeKind::From) {
                continue;
            }
            if let (Some(window), Some(next_start)) = (&mut period.window, next_start) {
                window.end = next_start;
            }
        }
    }

    /// Flag out-of-order or out-of-span windows; periods are kept as stated
    fn validate_windows(&mut self) {
        let mut violations: Vec<ComponentError> = Vec::new();

        if let Some(overall) = self.overall {
            for period in self.completed.iter().skip(1) {
                if let Some(window) = period.window {
                    if !overall.contains(&window) {
                        violations.push(ComponentError::period_ordering(
                            format!("{:02}{:02}/{:02}{:02}", window.start.day, window.start.hour, window.end.day, window.end.hour),
                            "change-group window outside the TAF valid span",
                        ));
                    }
                }
            }
        }

        for pair in self.completed.windows(2) {
            if let (Some(first), Some(second)) = (pair[0].window, pair[1].window) {
                if !second.start.wrapping_ge(first.start) {
                    violations.push(ComponentError::period_ordering(
                        format!("{:02}{:02}", second.start.day, second.start.hour),
                        "period starts before its predecessor",
                    ));
                }
            }
        }

        for violation in violations {
            self.warnings.push(DecodeWarning::new(violation, 0));
        }
    }

    fn warn(&mut self, error: ComponentError, token: &RawToken) {
        self.warnings.push(DecodeWarning::new(error, token.position));
    }

    fn warn_unrecognized(&mut self, token: &RawToken) {
        self.warn(ComponentError::unrecognized(&token.text), token);
    }
}

/// True when the period carries no stated components at all
fn period_states_nothing(period: &ForecastPeriod) -> bool {
    period.wind.is_none()
        && period.visibility.is_none()
        && period.weather.is_empty()
        && period.sky.is_empty()
        && period.qnh.is_none()
        && period.temperatures.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Phenomenon, WindDirection};
    use crate::app::services::grammar;

    fn classified(body: &str) -> Vec<ClassifiedToken> {
        let tokens: Vec<RawToken> = body
            .split_whitespace()
            .enumerate()
            .map(|(i, t)| RawToken::new(t, i))
            .collect();
        grammar::classify_all(&tokens)
    }

    fn span(start: (u8, u8), end: (u8, u8)) -> ValidPeriod {
        ValidPeriod::new(DayHour::new(start.0, start.1), DayHour::new(end.0, end.1))
    }

    #[test]
    fn test_single_initial_period() {
        let mut warnings = Vec::new();
        let overall = Some(span((6, 18), (7, 24)));
        let periods = run(&classified("28008KT 9999 FEW250"), overall, &mut warnings);

        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].kind, ChangeKind::Initial);
        assert_eq!(periods[0].window, overall);
        assert!(periods[0].wind.is_some());
        assert!(periods[0].visibility.is_some());
        assert_eq!(periods[0].sky.len(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_fm_resets_baseline() {
        let mut warnings = Vec::new();
        let overall = Some(span((6, 18), (7, 24)));
        let periods = run(
            &classified("28008KT 9999 FEW250 FM062000 32015G25KT 6000"),
            overall,
            &mut warnings,
        );

        assert_eq!(periods.len(), 2);
        let fm = &periods[1];
        assert_eq!(fm.kind, ChangeKind::From);
        assert_eq!(fm.window, Some(span((6, 20), (7, 24))));
        // Sky was not restated: an FM period does NOT inherit it.
        assert!(fm.sky.is_empty());
        assert_eq!(
            fm.wind.unwrap().direction,
            WindDirection::Degrees(320)
        );
    }

    #[test]
    fn test_becmg_inherits_from_nearest_preceding_period() {
        let mut warnings = Vec::new();
        let overall = Some(span((6, 18), (7, 24)));
        let periods = run(
            &classified("28008KT 9999 FEW250 FM0620 32015G25KT 6000 BKN015 BECMG 0700/0702 9999 NSW"),
            overall,
            &mut warnings,
        );

        assert_eq!(periods.len(), 3);
        let becmg = &periods[2];
        assert_eq!(becmg.kind, ChangeKind::Becoming);
        assert_eq!(becmg.window, Some(span((7, 0), (7, 2))));
        // Stated: visibility and NSW weather.
        assert_eq!(becmg.visibility.as_ref().unwrap().value, 9999.0);
        assert_eq!(
            becmg.weather[0].phenomena,
            vec![Phenomenon::NoSignificantWeather]
        );
        // Unspecified: wind and sky are inherited from the FM period.
        assert_eq!(becmg.wind, periods[1].wind);
        assert_eq!(becmg.sky, periods[1].sky);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_prob_tempo_is_one_period() {
        let mut warnings = Vec::new();
        let overall = Some(span((6, 18), (7, 24)));
        let periods = run(
            &classified("9999 PROB30 TEMPO 0620/0624 0800 FG"),
            overall,
            &mut warnings,
        );

        assert_eq!(periods.len(), 2);
        assert_eq!(
            periods[1].kind,
            ChangeKind::Probability {
                percent: 30,
                tempo: true
            }
        );
        assert_eq!(periods[1].window, Some(span((6, 20), (6, 24))));
    }

    #[test]
    fn test_ill_ordered_window_is_kept_and_flagged() {
        let mut warnings = Vec::new();
        let overall = Some(span((6, 0), (7, 0)));
        let periods = run(
            &classified("9999 BECMG 0612/0606 4000"),
            overall,
            &mut warnings,
        );

        assert_eq!(periods.len(), 2);
        // Best-effort: the stated window survives.
        assert_eq!(periods[1].window, Some(span((6, 12), (6, 6))));
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w.error, ComponentError::PeriodOrdering { .. }))
        );
    }

    #[test]
    fn test_window_outside_span_is_flagged() {
        let mut warnings = Vec::new();
        let overall = Some(span((6, 0), (6, 12)));
        run(
            &classified("9999 TEMPO 0812/0814 4000"),
            overall,
            &mut warnings,
        );

        assert!(
            warnings
                .iter()
                .any(|w| matches!(w.error, ComponentError::PeriodOrdering { .. }))
        );
    }

    #[test]
    fn test_initial_period_closes_at_first_fm() {
        let mut warnings = Vec::new();
        let overall = Some(span((6, 18), (7, 24)));
        let periods = run(
            &classified("28008KT 9999 FM070000 VRB02KT CAVOK"),
            overall,
            &mut warnings,
        );

        assert_eq!(periods[0].window, Some(span((6, 18), (7, 0))));
        assert_eq!(periods[1].window, Some(span((7, 0), (7, 24))));
    }
}
