use clap::Parser;
use metaf_decoder::cli::args::Args;
use metaf_decoder::cli::commands::{self, shared};
use std::process;

fn main() {
    let args = Args::parse();

    shared::setup_logging(&args.log_level, args.quiet);

    match commands::run(&args) {
        Ok(stats) => {
            if stats.is_success(args.strict) {
                process::exit(0);
            }
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}
