//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = trailcross_cli::run() {
        eprintln!("trailcross: {err}");
        std::process::exit(1);
    }
}
