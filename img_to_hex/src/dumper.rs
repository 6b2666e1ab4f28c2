/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Row-major hex dump of encoded pixels.
//!
//! Every byte is written as two uppercase hex digits and a space. A line
//! break follows every fourth pixel group; when the pixel count is not a
//! multiple of four the last line stays open.

use core::fmt;
use std::io::Write;

use log::debug;

use crate::encoder::{EncodedPixel, Encoding};
use crate::error::{Error, Result};
use crate::source::PixelSource;

pub const PIXELS_PER_LINE: u64 = 4;

/// How the traversed rectangle is derived from the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtentMode {
    /// From (0, 0) to the right/bottom edge of the non-blank region.
    #[default]
    BoundingBox,
    /// The decoded image's own size.
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Encoded bytes of one pixel and whether a line break follows them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteGroup {
    pub x: u32,
    pub y: u32,
    pub bytes: EncodedPixel,
    pub line_break: bool,
}

impl fmt::Display for ByteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes.as_bytes() {
            write!(f, "{byte:02X} ")?;
        }
        if self.line_break {
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DumpSummary {
    pub extent: Extent,
    pub pixels: u64,
    pub bytes: u64,
}

#[derive(Debug)]
pub struct PixelDumper<S> {
    source: S,
    encoding: Encoding,
    extent: Extent,
    header: bool,
}

impl<S: PixelSource> PixelDumper<S> {
    pub fn new(source: S, encoding: Encoding, mode: ExtentMode) -> Result<Self> {
        let extent = match mode {
            ExtentMode::BoundingBox => source
                .bounding_box()
                .map(|bbox| Extent {
                    width: bbox.right,
                    height: bbox.bottom,
                })
                .ok_or_else(|| Error::invalid_image("image has no bounding box"))?,
            ExtentMode::Full => Extent {
                width: source.width(),
                height: source.height(),
            },
        };

        if extent.pixels() == 0 {
            return Err(Error::invalid_image("zero-sized image"));
        }

        debug!(
            "extent {}x{} ({:?}) of {}x{} image, {:?} encoding",
            extent.width,
            extent.height,
            mode,
            source.width(),
            source.height(),
            encoding
        );

        Ok(PixelDumper {
            source,
            encoding,
            extent,
            header: false,
        })
    }

    /// Prefix the dump with a `width height` line.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Lazily encodes pixels, y outer and x inner, starting at (0, 0).
    pub fn groups(&self) -> impl Iterator<Item = ByteGroup> + '_ {
        let Extent { width, height } = self.extent;
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .zip(1u64..)
            .map(move |((x, y), count)| ByteGroup {
                x,
                y,
                bytes: self.encoding.encode(self.source.pixel(x, y)),
                line_break: count % PIXELS_PER_LINE == 0,
            })
    }

    /// Streams the dump into `sink`. On a write error whatever was already
    /// written stays in the sink.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<DumpSummary> {
        write!(sink, "{self}")?;
        sink.flush()?;

        let pixels = self.extent.pixels();
        Ok(DumpSummary {
            extent: self.extent,
            pixels,
            bytes: pixels * self.encoding.bytes_per_pixel() as u64,
        })
    }
}

impl<S: PixelSource> fmt::Display for PixelDumper<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.header {
            writeln!(f, "{} {}", self.extent.width, self.extent.height)?;
        }
        for group in self.groups() {
            write!(f, "{group}")?;
        }
        Ok(())
    }
}
