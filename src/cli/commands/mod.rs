//! Command execution for the METAR/TAF decoder CLI
//!
//! Dispatches the three input modes (single argument, batch file,
//! interactive prompt) to the decode command and carries the shared
//! logging/progress/statistics plumbing.

pub mod decode;
pub mod shared;

pub use shared::DecodeStats;

use crate::cli::args::Args;

/// Run the CLI: decode from the mode the arguments select.
///
/// Per-report decode failures never abort a run; they are printed and
/// counted. The returned statistics drive the process exit code.
pub fn run(args: &Args) -> std::io::Result<DecodeStats> {
    if let Some(report) = &args.report {
        decode::run_single(report, args)
    } else if let Some(path) = &args.file {
        decode::run_file(path, args)
    } else {
        decode::run_interactive(args)
    }
}
