use std::process::ExitCode;

use anyhow::Result;
use glprobe::cli::{parse_gamma_args, GAMMA_USAGE};
use glprobe::session::{ContextHints, SurfaceRequest};
use glprobe::{gamma, logging, Command, GammaConfig, LogLevel, Session};

fn run(config: GammaConfig) -> Result<()> {
    let request = SurfaceRequest {
        title: "Gamma Test",
        mode: config.mode,
        hints: ContextHints::default(),
    };

    let mut session = Session::open(&request)?;
    gamma::run(&mut session)?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init(LogLevel::default());

    let config = match parse_gamma_args(std::env::args_os()) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{}", GAMMA_USAGE);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}", err);
            print!("{}", GAMMA_USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
