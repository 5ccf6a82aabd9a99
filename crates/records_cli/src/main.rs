//! Demo entry point for `records_core`.
//!
//! # Responsibility
//! - Start logging, run the fixed repository demo, print its transcript.
//! - Exit non-zero when an entity fails validation during the demo.

use log::error;
use records_core::{default_log_dir, default_log_level, init_logging, run_demo};
use std::process::ExitCode;

fn main() -> ExitCode {
    let log_dir = default_log_dir();
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // Logging is optional for the demo; keep stdout untouched.
        eprintln!("records: logging disabled: {err}");
    }

    match run_demo() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=demo_finish module=cli status=error error={err}");
            eprintln!("records: {err}");
            ExitCode::FAILURE
        }
    }
}
