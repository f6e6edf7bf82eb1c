//! Shared CLI plumbing: logging setup, progress reporting, run statistics

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Statistics accumulated over one CLI run
#[derive(Debug, Clone, Default)]
pub struct DecodeStats {
    /// Reports attempted
    pub total: usize,

    /// Reports decoded successfully (possibly with warnings)
    pub decoded: usize,

    /// Reports that failed with a fatal decode error
    pub failed: usize,

    /// Successfully decoded reports that carried at least one warning
    pub with_warnings: usize,
}

impl DecodeStats {
    /// Whether this run should exit successfully
    pub fn is_success(&self, strict: bool) -> bool {
        self.failed == 0 && (!strict || self.with_warnings == 0)
    }

    /// Print a one-line run summary to stderr
    pub fn print_summary(&self) {
        let failed = if self.failed > 0 {
            format!("{} failed", self.failed).red().to_string()
        } else {
            format!("{} failed", self.failed)
        };
        eprintln!(
            "{}: {} decoded, {}, {} with warnings",
            "summary".bold(),
            self.decoded,
            failed,
            self.with_warnings,
        );
    }
}

/// Set up structured logging for the run
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metaf_decoder={log_level}")));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("logging initialized at level: {log_level}");
}

/// Create a progress bar for quiet batch runs
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("progress bar template")
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_success_policy() {
        let stats = DecodeStats {
            total: 3,
            decoded: 3,
            failed: 0,
            with_warnings: 1,
        };
        assert!(stats.is_success(false));
        // Strict mode turns warnings into a failing exit code.
        assert!(!stats.is_success(true));

        let stats = DecodeStats {
            total: 2,
            decoded: 1,
            failed: 1,
            with_warnings: 0,
        };
        assert!(!stats.is_success(false));
    }
}
