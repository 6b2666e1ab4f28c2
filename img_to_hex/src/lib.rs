/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

pub mod cli;
pub mod dumper;
pub mod encoder;
pub mod error;
pub mod source;
pub mod utils;

use std::io::Write;

use log::info;

pub use crate::cli::Cli;
pub use crate::dumper::{ByteGroup, DumpSummary, Extent, ExtentMode, PixelDumper};
pub use crate::encoder::{EncodedPixel, Encoding};
pub use crate::error::{Error, Result};
pub use crate::source::{BoundingBox, DecodedImage, Pixel, PixelSource};

/// Decodes the image named on the command line and dumps it into `out`.
pub fn run<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> Result<DumpSummary> {
    let image = DecodedImage::open(&cli.image)?;
    let dumper = PixelDumper::new(&image, cli.format, cli.extent_mode())
        .map_err(|e| e.with_path(&cli.image))?
        .with_header(cli.header);
    let summary = dumper.write_to(out)?;

    info!(
        "dumped {}x{} ({} pixels, {} bytes, {:?}) from {}",
        summary.extent.width,
        summary.extent.height,
        summary.pixels,
        summary.bytes,
        dumper.encoding(),
        cli.image.display()
    );

    Ok(summary)
}
