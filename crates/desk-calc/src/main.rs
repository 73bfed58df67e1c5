//! desk-calc binary
//!
//! ## Usage
//!
//! ```bash
//! desk-calc                            # interactive keypad
//! desk-calc --eval "5 + 3 ="           # prints 8
//! desk-calc --eval "1 / 3 =" --steps   # display after every token
//! ```

use std::process::ExitCode;

use clap::Parser;
use desk_calc::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
