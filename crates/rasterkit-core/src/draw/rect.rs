//! Rectangle drawing.

use log::debug;

use super::Stroke;
use crate::error::EditError;
use crate::geometry::{validate_rectangle, Point};
use crate::raster::RasterImage;

/// Draw a rectangle border, and optionally its interior, in place.
///
/// The corners are validated and clamped with
/// [`validate_rectangle`](crate::geometry::validate_rectangle). Every pixel
/// whose distance to the nearest rectangle edge is less than the thickness
/// gets the border color; the remaining interior gets the fill color if one
/// was requested.
///
/// # Errors
///
/// - `EditError::Draw` for a non-positive thickness or fill without color
/// - `EditError::Geometry` if `left_up` is not above and left of `right_down`
///
/// Nothing is drawn when an error is returned.
pub fn draw_rect(
    image: &mut RasterImage,
    left_up: Point,
    right_down: Point,
    stroke: &Stroke,
) -> Result<(), EditError> {
    let fill = stroke.resolve()?;
    let rect = validate_rectangle(left_up, right_down, image.width(), image.height())?;
    debug!("rect {rect} thickness={} fill={fill:?}", stroke.thickness);

    let thickness = stroke.thickness as u64;

    for y in rect.top()..=rect.bottom() {
        for x in rect.left()..=rect.right() {
            let edge = (x - rect.left())
                .min(rect.right() - x)
                .min(y - rect.top())
                .min(rect.bottom() - y);

            if (edge as u64) < thickness {
                image.set_pixel(x, y, stroke.color);
            } else if let Some(fill) = fill {
                image.set_pixel(x, y, fill);
            }
        }
    }

    Ok(())
}
