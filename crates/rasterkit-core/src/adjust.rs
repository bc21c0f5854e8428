//! Pointwise color adjustments.
//!
//! Both operations visit every pixel independently, so traversal order has
//! no effect on the result.
//!
//! ## Operations
//! 1. Color replace: exact-match substitution of one color by another
//! 2. RGB filter: force one channel of every pixel to a fixed value

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::EditError;
use crate::geometry::Color;
use crate::raster::RasterImage;

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Byte offset of this channel inside an RGB pixel.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl FromStr for Channel {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            _ => Err(EditError::args("--component_name [red|green|blue] required")),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check an RGB filter value and narrow it to a byte.
pub fn channel_value(value: i64) -> Result<u8, EditError> {
    u8::try_from(value).map_err(|_| EditError::args("--component_value 0-255"))
}

/// Replace every pixel exactly equal to `old` with `new`.
///
/// Returns the number of pixels replaced. With `old == new` the image is
/// left as it was, though matching pixels are still counted.
pub fn color_replace(image: &mut RasterImage, old: Color, new: Color) -> u64 {
    let old = old.to_rgb();
    let new = new.to_rgb();
    let mut replaced = 0u64;

    for chunk in image.pixels_mut().chunks_exact_mut(3) {
        if *chunk == old {
            chunk.copy_from_slice(&new);
            replaced += 1;
        }
    }

    debug!("color_replace {old:?} -> {new:?}: {replaced} pixels");
    replaced
}

/// Set `channel` of every pixel to `value`, leaving the other channels alone.
///
/// Applying the same filter twice is the same as applying it once.
pub fn rgb_filter(image: &mut RasterImage, channel: Channel, value: u8) {
    let offset = channel.offset();
    for chunk in image.pixels_mut().chunks_exact_mut(3) {
        chunk[offset] = value;
    }
    debug!("rgbfilter {channel}={value}");
}


// ============================================================================
// Property-Based Tests
// ============================================================================
