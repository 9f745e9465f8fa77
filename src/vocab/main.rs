//! The binary only invokes `cli::run()` and turns its error into an exit code.
//!
//! Page failures (backend down, unknown notebook, bad payload) are not errors at this
//! level: they render as error pages and exit 0. Only argument, configuration and I/O
//! problems reach `main` and exit 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
