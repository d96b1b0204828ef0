//! LiftMark - LMWF workout parser

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = liftmark::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
