//! Circle drawing.

use log::debug;

use super::Stroke;
use crate::error::EditError;
use crate::geometry::Point;
use crate::raster::RasterImage;

/// Draw a circle border, and optionally its interior, in place.
///
/// A pixel at offset `(dx, dy)` from the center is on the border when
/// `(radius - thickness)² < dx² + dy² <= radius²`, and inside the fill when
/// `dx² + dy² <= (radius - thickness)²`. Parts of the circle outside the
/// image are clipped.
///
/// # Errors
///
/// - `EditError::Draw` for a non-positive radius or thickness, or fill
///   without a fill color
/// - `EditError::Coordinates` if `center` is not a pixel of the image. Unlike
///   rectangle corners the center is never clamped.
pub fn draw_circle(
    image: &mut RasterImage,
    center: Point,
    radius: i64,
    stroke: &Stroke,
) -> Result<(), EditError> {
    if radius <= 0 || stroke.thickness <= 0 {
        return Err(EditError::draw("Radius and thickness must be positive"));
    }
    let fill = stroke.resolve()?;

    if !center.is_within(image.width(), image.height()) {
        return Err(EditError::Coordinates(
            "Center coordinates out of bounds".to_string(),
        ));
    }
    debug!(
        "circle center={center} radius={radius} thickness={} fill={fill:?}",
        stroke.thickness
    );

    let outer = (radius as i128).pow(2);
    let inner_radius = radius - stroke.thickness;
    let inner = if inner_radius > 0 {
        Some((inner_radius as i128).pow(2))
    } else {
        None
    };

    let max_x = image.width() as i64 - 1;
    let max_y = image.height() as i64 - 1;
    let x_range = center.x.saturating_sub(radius).max(0)..=center.x.saturating_add(radius).min(max_x);
    let y_range = center.y.saturating_sub(radius).max(0)..=center.y.saturating_add(radius).min(max_y);

    for y in y_range {
        let dy = (y - center.y) as i128;
        for x in x_range.clone() {
            let dx = (x - center.x) as i128;
            let dist = dx * dx + dy * dy;
            if dist > outer {
                continue;
            }

            let in_interior = inner.is_some_and(|inner| dist <= inner);
            if !in_interior {
                image.set_pixel(x as u32, y as u32, stroke.color);
            } else if let Some(fill) = fill {
                image.set_pixel(x as u32, y as u32, fill);
            }
        }
    }

    Ok(())
}
