/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::ffi::OsString;
use std::io::BufWriter;
use std::process::ExitCode;

use clap::CommandFactory;
use img_to_hex::utils::logger;
use img_to_hex::{Cli, Error};
use log::{LevelFilter, error};

fn main() -> ExitCode {
    real_main(std::env::args_os())
}

fn real_main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_args(args) {
        Ok(cli) => cli,
        // --help and --version land here too
        Err(Error::Usage(e)) => e.exit(),
        Err(e) => {
            logger::init(LevelFilter::Warn).ok();
            error!("{e}");
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
    };
    logger::init(cli.log_level()).ok();

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match img_to_hex::run(&cli, &mut writer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
