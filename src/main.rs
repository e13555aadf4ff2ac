use std::process::ExitCode;

use clap::Parser;
use cldrdict::args::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match cldrdict::pipeline::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
