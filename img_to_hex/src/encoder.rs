/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use clap::ValueEnum;

use crate::source::Pixel;

const MAX_BYTES_PER_PIXEL: usize = 4;

/// Byte layout a pixel is reduced to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// `c0 c1 c2 00`, alpha dropped
    #[default]
    Full,
    /// `c0.hi|c1.hi` then `c2.hi|0`
    Packed,
}

impl Encoding {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Encoding::Full => 4,
            Encoding::Packed => 2,
        }
    }

    pub fn encode(self, pixel: Pixel) -> EncodedPixel {
        let [c0, c1, c2] = pixel.channels;
        match self {
            Encoding::Full => EncodedPixel::new(&[c0, c1, c2, 0x00]),
            // c2's low nibble is dropped, not packed with anything
            Encoding::Packed => EncodedPixel::new(&[(c0 & 0xF0) | ((c1 >> 4) & 0x0F), c2 & 0xF0]),
        }
    }
}

/// Fixed-capacity byte group for a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedPixel {
    bytes: [u8; MAX_BYTES_PER_PIXEL],
    len: usize,
}

impl EncodedPixel {
    fn new(src: &[u8]) -> Self {
        let mut bytes = [0; MAX_BYTES_PER_PIXEL];
        bytes[..src.len()].copy_from_slice(src);
        EncodedPixel {
            bytes,
            len: src.len(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
