//! Shared fixtures for unit tests.

use crate::geometry::Color;
use crate::raster::RasterImage;

/// Create a test image where each pixel encodes its position:
/// `r = x`, `g = y`, `b = x + y` (all modulo 256).
pub fn gradient(width: u32, height: u32) -> RasterImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x % 256) as u8);
            pixels.push((y % 256) as u8);
            pixels.push(((x + y) % 256) as u8);
        }
    }
    RasterImage::new(width, height, pixels).unwrap()
}

/// A `width`×`height` image of a single color.
pub fn solid(width: u32, height: u32, color: Color) -> RasterImage {
    RasterImage::filled(width, height, color).unwrap()
}

/// The 10×10 all-white canvas most scenarios start from.
pub fn white10() -> RasterImage {
    solid(10, 10, Color::WHITE)
}
