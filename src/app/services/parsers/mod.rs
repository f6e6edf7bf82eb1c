//! Component parsers for individual report groups
//!
//! One module per weather element. Each parser is a pure function of its
//! input token (or token run): it receives text the dispatcher classified
//! and returns the corresponding typed value, or a [`ComponentError`] that
//! the assembler downgrades to a warning.
//!
//! Numeric handling is locale-independent throughout: ASCII digits only,
//! `.` as the only decimal separator, and out-of-range payloads fail with a
//! typed error rather than silently defaulting.
//!
//! [`ComponentError`]: crate::error::ComponentError

pub mod pressure;
pub mod runway;
pub mod sky;
pub mod temperature;
pub mod time;
pub mod trend;
pub mod visibility;
pub mod weather;
pub mod wind;
pub mod windshear;

#[cfg(test)]
pub mod tests;
