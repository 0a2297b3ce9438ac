// src/main.rs
use std::io::Write as _;
use std::process::ExitCode;

use bookstat::{AnalyzerError, Args, run};
use clap::Parser;
use env_logger::Builder;

fn main() -> ExitCode {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Pipeline failures carry their own user-facing message.
            if let Some(analyzer_err) = err.downcast_ref::<AnalyzerError>() {
                println!("{analyzer_err}");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
