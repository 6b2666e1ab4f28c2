/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use log::LevelFilter;

use crate::dumper::ExtentMode;
use crate::encoder::Encoding;
use crate::error::{Error, Result};

#[derive(Debug, Parser)]
#[command(name = "img_to_hex", version, about = "Dump image pixels as hex bytes")]
pub struct Cli {
    /// Image to dump
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Byte layout of each pixel
    #[arg(short, long, value_enum, default_value_t = Encoding::Full)]
    pub format: Encoding,

    /// Dump the whole image instead of stopping at the bounding box
    #[arg(long)]
    pub full_extent: bool,

    /// Print `width height` before the dump
    #[arg(long)]
    pub header: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn try_parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::MissingRequiredArgument => Error::MissingArgument,
            _ => Error::Usage(e),
        })
    }

    pub fn extent_mode(&self) -> ExtentMode {
        if self.full_extent {
            ExtentMode::Full
        } else {
            ExtentMode::BoundingBox
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use log::LevelFilter;

    use super::Cli;
    use crate::dumper::ExtentMode;
    use crate::encoder::Encoding;
    use crate::error::Error;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_args(["img_to_hex", "bg.png"]).unwrap();
        assert_eq!(cli.image, Path::new("bg.png"));
        assert_eq!(cli.format, Encoding::Full);
        assert_eq!(cli.extent_mode(), ExtentMode::BoundingBox);
        assert!(!cli.header);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn packed_with_options() {
        let cli = Cli::try_parse_args([
            "img_to_hex",
            "-f",
            "packed",
            "--full-extent",
            "--header",
            "-vv",
            "bg.png",
        ])
        .unwrap();
        assert_eq!(cli.format, Encoding::Packed);
        assert_eq!(cli.extent_mode(), ExtentMode::Full);
        assert!(cli.header);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn missing_path_is_its_own_error() {
        let err = Cli::try_parse_args(["img_to_hex"]).unwrap_err();
        assert!(matches!(err, Error::MissingArgument));
    }

    #[test]
    fn unknown_format_is_a_usage_error() {
        let err = Cli::try_parse_args(["img_to_hex", "-f", "rgb565", "bg.png"]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }
}
