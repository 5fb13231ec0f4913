use clap::Parser;
use ratescope::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
