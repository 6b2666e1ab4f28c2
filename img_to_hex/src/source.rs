/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Read-only pixel access over a decoded image.

use std::path::Path;

use image::{DynamicImage, ImageReader, RgbaImage};
use log::debug;

use crate::error::{Error, Result};

/// One pixel: three color channels plus alpha when the image has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub channels: [u8; 3],
    pub alpha: Option<u8>,
}

impl Pixel {
    pub const fn rgb(c0: u8, c1: u8, c2: u8) -> Self {
        Pixel {
            channels: [c0, c1, c2],
            alpha: None,
        }
    }

    pub const fn rgba(c0: u8, c1: u8, c2: u8, c3: u8) -> Self {
        Pixel {
            channels: [c0, c1, c2],
            alpha: Some(c3),
        }
    }

    /// Fully transparent, or all-zero when there is no alpha channel.
    pub fn is_blank(&self) -> bool {
        match self.alpha {
            Some(a) => a == 0,
            None => self.channels == [0, 0, 0],
        }
    }
}

/// Non-blank region of an image. `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// `x < width()` and `y < height()` must hold.
    fn pixel(&self, x: u32, y: u32) -> Pixel;

    /// `None` when every pixel is blank.
    fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.pixel(x, y).is_blank() {
                    continue;
                }
                let b = bbox.get_or_insert(BoundingBox {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                });
                b.left = b.left.min(x);
                b.right = b.right.max(x + 1);
                b.bottom = y + 1;
            }
        }
        bbox
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        (**self).pixel(x, y)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        (**self).bounding_box()
    }
}

/// Image decoded by the `image` crate, normalized to 8-bit RGBA.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    buffer: RgbaImage,
    has_alpha: bool,
}

impl DecodedImage {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| Error::invalid_image(e.to_string()).with_path(path))?;
        let format = reader.format();
        let img = reader
            .decode()
            .map_err(|e| Error::invalid_image(e.to_string()).with_path(path))?;

        debug!(
            "decoded {} as {:?} ({:?}, {}x{})",
            path.display(),
            format,
            img.color(),
            img.width(),
            img.height()
        );

        Ok(img.into())
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(img: DynamicImage) -> Self {
        let has_alpha = img.color().has_alpha();
        DecodedImage {
            buffer: img.into_rgba8(),
            has_alpha,
        }
    }
}

impl PixelSource for DecodedImage {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        let [c0, c1, c2, c3] = self.buffer.get_pixel(x, y).0;
        if self.has_alpha {
            Pixel::rgba(c0, c1, c2, c3)
        } else {
            Pixel::rgb(c0, c1, c2)
        }
    }
}
