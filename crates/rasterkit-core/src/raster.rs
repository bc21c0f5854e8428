//! The RGB pixel buffer every operation works on.

use crate::error::EditError;
use crate::geometry::{Color, Rectangle};

/// An owned 24-bit RGB image.
///
/// Pixels are stored row-major, 3 bytes per pixel, so the buffer length is
/// always `width * height * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Byte length of a `width`×`height` RGB buffer, if it fits in memory.
fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(3)
}

impl RasterImage {
    /// Wrap existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Invariant` if `pixels` is not exactly
    /// `width * height * 3` bytes long.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EditError> {
        let expected = buffer_len(width, height)
            .ok_or_else(|| EditError::Memory(format!("{width}x{height} image is too large")))?;
        if pixels.len() != expected {
            return Err(EditError::Invariant(format!(
                "pixel buffer for {width}x{height} image must be {expected} bytes, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Assemble an image from a buffer the caller built to the right length.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            Some(pixels.len()),
            buffer_len(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Allocate an image filled with a single color.
    ///
    /// Allocation goes through `try_reserve_exact` so that oversized requests
    /// surface as `EditError::Memory` instead of aborting the process.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, EditError> {
        let len = buffer_len(width, height)
            .ok_or_else(|| EditError::Memory(format!("{width}x{height} image is too large")))?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len)?;
        let rgb = color.to_rgb();
        for _ in 0..len / 3 {
            pixels.extend_from_slice(&rgb);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a RasterImage from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert into an `image::RgbImage` for encoding.
    pub fn into_rgb_image(self) -> Result<image::RgbImage, EditError> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels)
            .ok_or_else(|| EditError::Invariant("pixel buffer does not match dimensions".into()))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major RGB bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw RGB bytes. The length cannot change through this slice.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some(Color::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Set the pixel at `(x, y)`. Writes outside the image are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.pixels[idx..idx + 3].copy_from_slice(&color.to_rgb());
    }

    /// Row `y` as a byte slice.
    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize * 3]
    }

    /// Copy the inclusive `rect` into a new image.
    ///
    /// `rect` must lie inside this image, which holds for any rectangle
    /// produced by `validate_rectangle` with these dimensions.
    pub fn crop(&self, rect: &Rectangle) -> RasterImage {
        let out_width = rect.width();
        let out_height = rect.height();
        let row_bytes = out_width as usize * 3;

        let mut output = Vec::with_capacity(row_bytes * out_height as usize);

        // Copy pixel data row by row
        for y in rect.top()..=rect.bottom() {
            let start = self.index(rect.left(), y);
            output.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }

        RasterImage {
            width: out_width,
            height: out_height,
            pixels: output,
        }
    }

    /// Paste `src` with its top-left corner at `(x, y)`.
    ///
    /// Parts of `src` that fall outside this image are dropped.
    pub fn paste(&mut self, src: &RasterImage, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let copy_w = src.width.min(self.width - x) as usize;
        let copy_h = src.height.min(self.height - y);

        for row in 0..copy_h {
            let src_start = src.index(0, row);
            let dst_start = self.index(x, y + row);
            self.pixels[dst_start..dst_start + copy_w * 3]
                .copy_from_slice(&src.pixels[src_start..src_start + copy_w * 3]);
        }
    }
}
