/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use core::fmt;
use std::io::{IsTerminal, Write};
use std::time::{Duration, Instant};

use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};

pub mod color {
    pub const RESET: &str = "\x1b[0m";

    pub const GRAY: &str = "\x1b[38;5;243m";
    pub const RED: &str = "\x1b[38;5;1m";
    pub const GREEN: &str = "\x1b[38;5;46m";
    pub const YELLOW: &str = "\x1b[38;5;226m";
    pub const CYAN: &str = "\x1b[38;5;51m";
    pub const PURPLE: &str = "\x1b[38;5;91m";
}

const SUBSECOND_DIGITS: u32 = 5;

/// Overrides the `-v` level, same syntax as `RUST_LOG`.
pub const LOG_ENV: &str = "IMG_TO_HEX_LOG";

/// Logs to stderr so stdout carries only the dump.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let start = Instant::now();
    let colored = std::io::stderr().is_terminal();

    Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .target(Target::Stderr)
        .format(move |buf, record| {
            let line = format_line(
                start.elapsed(),
                record.level(),
                record.module_path().unwrap_or(record.target()),
                record.args(),
                colored,
            );
            writeln!(buf, "{line}")
        })
        .try_init()
}

fn tag(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::Error => ("error", color::RED),
        Level::Warn => ("warn", color::YELLOW),
        Level::Info => ("info", color::GREEN),
        Level::Debug => ("dbug", color::CYAN),
        Level::Trace => ("trce", color::PURPLE),
    }
}

/// `[hh:mm:ss.fffff] [ level ] module: message`
pub fn format_line(
    elapsed: Duration,
    level: Level,
    mut module_path: &str,
    args: impl fmt::Display,
    colored: bool,
) -> String {
    module_path = module_path.rsplit("::").next().unwrap_or(module_path);

    let divisor = 10u32.pow(9 - SUBSECOND_DIGITS);
    let subsecond = elapsed.subsec_nanos() / divisor;

    let seconds_total = elapsed.as_secs();
    let seconds = seconds_total % 60;
    let minutes_total = seconds_total / 60;
    let minutes = minutes_total % 60;
    let hours = minutes_total / 60;

    let (name, level_color) = tag(level);
    let (level_color, gray, reset) = if colored {
        (level_color, color::GRAY, color::RESET)
    } else {
        ("", "", "")
    };

    format!(
        "[{:02}:{:02}:{:02}.{:0width$}] [ {}{}{} ] {}{}:{} {}",
        hours,
        minutes,
        seconds,
        subsecond,
        level_color,
        name,
        reset,
        gray,
        module_path,
        reset,
        args,
        width = SUBSECOND_DIGITS as usize
    )
}
