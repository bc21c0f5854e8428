//! Mirroring a region in place.

use std::str::FromStr;

use log::debug;

use crate::error::EditError;
use crate::geometry::{validate_rectangle, Point};
use crate::raster::RasterImage;

/// Axis a region is mirrored across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorAxis {
    /// Flip left-right.
    X,
    /// Flip top-bottom.
    Y,
}

impl FromStr for MirrorAxis {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(MirrorAxis::X),
            "y" => Ok(MirrorAxis::Y),
            _ => Err(EditError::args("Invalid axis")),
        }
    }
}

/// Flip the inclusive region between `left_up` and `right_down` in place.
///
/// Applying the same mirror twice restores the original pixels.
pub fn mirror_region(
    image: &mut RasterImage,
    axis: MirrorAxis,
    left_up: Point,
    right_down: Point,
) -> Result<(), EditError> {
    let rect = validate_rectangle(left_up, right_down, image.width(), image.height())?;
    debug!("mirror {rect} across {axis:?}");

    let stride = image.width() as usize * 3;
    let left = rect.left() as usize * 3;
    let span = rect.width() as usize * 3;
    let pixels = image.pixels_mut();

    match axis {
        MirrorAxis::X => {
            for y in rect.top()..=rect.bottom() {
                let start = y as usize * stride + left;
                let row = &mut pixels[start..start + span];
                // Reverse pixel order, keeping each pixel's channel order
                let count = row.len() / 3;
                for i in 0..count / 2 {
                    let j = count - 1 - i;
                    for c in 0..3 {
                        row.swap(i * 3 + c, j * 3 + c);
                    }
                }
            }
        }
        MirrorAxis::Y => {
            let (mut top, mut bottom) = (rect.top() as usize, rect.bottom() as usize);
            while top < bottom {
                let (upper, lower) = pixels.split_at_mut(bottom * stride);
                let a = top * stride + left;
                upper[a..a + span].swap_with_slice(&mut lower[left..left + span]);
                top += 1;
                bottom -= 1;
            }
        }
    }

    Ok(())
}
