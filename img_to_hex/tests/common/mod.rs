/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use img_to_hex::DecodedImage;

pub fn solid_rgb(width: u32, height: u32, px: [u8; 3]) -> DecodedImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(px))).into()
}

/// Every pixel distinct and non-black: `(x, y, x ^ y)` offset by one.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x as u8).wrapping_add(1),
            (y as u8).wrapping_add(1),
            ((x ^ y) as u8).wrapping_add(1),
        ])
    })
}

/// `inner` sized opaque block at (0, 0) inside a transparent canvas.
pub fn padded_rgba(width: u32, height: u32, inner: (u32, u32), px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if x < inner.0 && y < inner.1 {
            Rgba(px)
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Fresh directory under the system temp dir, removed with everything in
/// it when dropped.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("img_to_hex-{}-{n}", std::process::id()));
        std::fs::create_dir_all(&path).expect("failed to create temp dir");
        TempDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.path).ok();
    }
}

pub fn count_hex_bytes(dump: &str) -> usize {
    dump.split_whitespace().count()
}
