//! The mdpage command-line executable.

use std::process::ExitCode;

fn main() -> ExitCode {
    match mdpage::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // One diagnostic line, `<program-name>: <description>`, with the
            // full context chain.
            eprintln!("{}: {err:#}", env!("CARGO_PKG_NAME"));
            ExitCode::FAILURE
        }
    }
}
