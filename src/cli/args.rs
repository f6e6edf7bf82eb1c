//! Command-line argument definitions for the METAR/TAF decoder
//!
//! This module defines the CLI interface using the clap derive API. The
//! binary is single-purpose: decode one report given as an argument, a file
//! of newline-delimited reports, or lines read interactively.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{DecodeConfig, ForcedReportType};

/// CLI arguments for the METAR/TAF decoder
///
/// Decodes METAR observations and TAF forecasts into structured output.
/// With no report argument and no input file, reads reports interactively
/// from standard input, one per line.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metaf-decoder",
    version,
    about = "Decode METAR and TAF aviation weather reports",
    long_about = "Decodes METAR observations and TAF forecasts into structured, \
                  strongly-typed data. Reports with malformed optional groups still \
                  decode; the problems are surfaced as warnings alongside the result. \
                  Only a missing station identifier or time group fails a decode."
)]
pub struct Args {
    /// The report to decode, as a single quoted string
    ///
    /// Example: metaf-decoder "METAR KJFK 061751Z 28008KT 10SM FEW250 22/18 A2992"
    #[arg(value_name = "REPORT")]
    pub report: Option<String>,

    /// Read newline-delimited reports from a file
    ///
    /// Each non-empty line is decoded independently; a fatal error on one
    /// line is reported and processing continues with the next.
    #[arg(short = 'f', long = "file", value_name = "PATH", conflicts_with = "report")]
    pub file: Option<PathBuf>,

    /// Output format for decoded reports
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Force the report type when the leading keyword is absent
    ///
    /// By default the type is detected from the leading METAR/SPECI/TAF
    /// keyword, falling back to the presence of a TAF valid-period group.
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub report_type: Option<ReportTypeArg>,

    /// Skip the remarks section entirely
    #[arg(long = "no-remarks")]
    pub no_remarks: bool,

    /// Treat decode warnings as failures for the exit code
    #[arg(long = "strict")]
    pub strict: bool,

    /// Suppress per-report output in batch mode; show progress and summary only
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log level for diagnostic output (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable multi-line text
    Text,
    /// One JSON document per report
    Json,
}

/// Report type override values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportTypeArg {
    Metar,
    Taf,
}

impl Args {
    /// Build the decoder configuration these arguments describe
    pub fn decode_config(&self) -> DecodeConfig {
        DecodeConfig {
            report_type: self.report_type.map(|t| match t {
                ReportTypeArg::Metar => ForcedReportType::Metar,
                ReportTypeArg::Taf => ForcedReportType::Taf,
            }),
            parse_remarks: !self.no_remarks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_report() {
        let args = Args::parse_from(["metaf-decoder", "METAR KJFK 061751Z 28008KT"]);
        assert!(args.report.is_some());
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.decode_config().parse_remarks);
    }

    #[test]
    fn test_parse_file_mode() {
        let args = Args::parse_from(["metaf-decoder", "--file", "reports.txt", "--format", "json"]);
        assert!(args.file.is_some());
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_type_override_maps_to_config() {
        let args = Args::parse_from(["metaf-decoder", "--type", "taf", "KJFK 061730Z 0618/0724"]);
        assert_eq!(
            args.decode_config().report_type,
            Some(ForcedReportType::Taf)
        );
    }

    #[test]
    fn test_no_remarks_flag() {
        let args = Args::parse_from(["metaf-decoder", "--no-remarks", "METAR KJFK 061751Z"]);
        assert!(!args.decode_config().parse_remarks);
    }
}
