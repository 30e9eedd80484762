use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use glprobe::cli::{parse_info_args, INFO_USAGE};
use glprobe::config::DisplayMode;
use glprobe::probe::GlProbe;
use glprobe::report::write_report;
use glprobe::session::{ContextHints, SurfaceRequest};
use glprobe::{logging, Command, InfoConfig, LogLevel, Session};

fn run(config: InfoConfig) -> Result<()> {
    // Pixel format selection is left entirely to SDL
    let request = SurfaceRequest {
        title: "Version",
        mode: DisplayMode::Windowed,
        hints: ContextHints::from(&config),
    };
    let session = Session::open(&request)?;

    let probe = GlProbe::new(session.video());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &probe, config.list_extensions)?;
    out.flush().context("failed to flush report")?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init(LogLevel::default());

    let config = match parse_info_args(std::env::args_os()) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{}", INFO_USAGE);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}", err);
            print!("{}", INFO_USAGE);
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
