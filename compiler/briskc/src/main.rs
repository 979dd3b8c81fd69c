//! Brisk CLI

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use briskc::commands::{dispatch, print_usage, EXIT_CLI_ERROR};

fn main() -> ExitCode {
    briskc::tracing_setup::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();
    let err_is_tty = err.is_terminal();

    match dispatch(&args, &mut out, &mut err, err_is_tty) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            if e.wants_usage() {
                let _ = writeln!(err);
                let _ = print_usage(&mut err);
            }
            ExitCode::from(EXIT_CLI_ERROR)
        }
    }
}
