//! Right-angle rotation of a rectangular region.
//!
//! Only quarter turns are supported, so every output pixel maps to exactly
//! one input pixel and no interpolation is needed.
//!
//! For a source region of `w`×`h` pixels, counter-clockwise rotation maps
//! output pixels back to the source as:
//! ```text
//!  90°: dst(x, y) = src(w - 1 - y, x)          output is h×w
//! 180°: dst(x, y) = src(w - 1 - x, h - 1 - y)  output is w×h
//! 270°: dst(x, y) = src(y, h - 1 - x)          output is h×w
//! ```

use std::fmt;

use log::debug;

use crate::error::EditError;
use crate::geometry::{misses_image, validate_rectangle, Point, Rectangle};
use crate::raster::RasterImage;

/// A counter-clockwise quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RightAngle {
    Deg90,
    Deg180,
    Deg270,
}

impl RightAngle {
    /// Angle in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            RightAngle::Deg90 => 90,
            RightAngle::Deg180 => 180,
            RightAngle::Deg270 => 270,
        }
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, RightAngle::Deg90 | RightAngle::Deg270)
    }
}

impl TryFrom<i64> for RightAngle {
    type Error = EditError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            90 => Ok(RightAngle::Deg90),
            180 => Ok(RightAngle::Deg180),
            270 => Ok(RightAngle::Deg270),
            _ => Err(EditError::draw("Invalid angle")),
        }
    }
}

impl fmt::Display for RightAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Rotate a whole image counter-clockwise by a quarter turn.
pub fn rotate_image(image: &RasterImage, angle: RightAngle) -> RasterImage {
    let (src_w, src_h) = (image.width(), image.height());
    let (dst_w, dst_h) = if angle.swaps_dimensions() {
        (src_h, src_w)
    } else {
        (src_w, src_h)
    };

    let mut output = Vec::with_capacity(image.byte_size());
    let src = image.pixels();

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let (src_x, src_y) = match angle {
                RightAngle::Deg90 => (src_w - 1 - dst_y, dst_x),
                RightAngle::Deg180 => (src_w - 1 - dst_x, src_h - 1 - dst_y),
                RightAngle::Deg270 => (dst_y, src_h - 1 - dst_x),
            };
            let idx = (src_y as usize * src_w as usize + src_x as usize) * 3;
            output.extend_from_slice(&src[idx..idx + 3]);
        }
    }

    RasterImage::from_parts(dst_w, dst_h, output)
}

/// Rotate the inclusive region between `left_up` and `right_down` in place.
///
/// The region is cropped, rotated counter-clockwise and pasted back with its
/// top-left corner where the region's top-left corner was. A non-square
/// region turned by 90° or 270° does not fit back into its own footprint;
/// the rotated block is cut down to the overlap with the original region
/// before pasting, so the rest of it is lost. This is intentional.
///
/// # Errors
///
/// - `EditError::Geometry` if the corners are out of order
/// - `EditError::Trim` if the region lies entirely outside the image
pub fn rotate_region(
    image: &mut RasterImage,
    left_up: Point,
    right_down: Point,
    angle: RightAngle,
) -> Result<(), EditError> {
    let rect = validate_rectangle(left_up, right_down, image.width(), image.height())?;
    if misses_image(left_up, right_down, image.width(), image.height()) {
        return Err(EditError::Trim("Rotate area empty".to_string()));
    }
    debug!("rotate {rect} by {angle}");

    let region = image.crop(&rect);
    let rotated = rotate_image(&region, angle);

    let keep_w = rotated.width().min(rect.width());
    let keep_h = rotated.height().min(rect.height());
    let rotated = if (keep_w, keep_h) == (rotated.width(), rotated.height()) {
        rotated
    } else {
        rotated.crop(&Rectangle {
            left_up: Point::new(0, 0),
            right_down: Point::new(keep_w as i64 - 1, keep_h as i64 - 1),
        })
    };

    image.paste(&rotated, rect.left(), rect.top());
    Ok(())
}
