//! Trimming an image down to a rectangle.
//!
//! # Example
//!
//! ```ignore
//! // Keep columns 2..=5 and rows 2..=5
//! let trimmed = trim(&image, Point::new(2, 2), Point::new(5, 5))?;
//! assert_eq!((trimmed.width(), trimmed.height()), (4, 4));
//! ```

use log::debug;

use crate::error::EditError;
use crate::geometry::{misses_image, validate_rectangle, Point};
use crate::raster::RasterImage;

/// Return a new image containing exactly the inclusive rectangle.
///
/// The output is `(x2 - x1 + 1)`×`(y2 - y1 + 1)` for the clamped corners.
/// The source image is not modified.
///
/// # Errors
///
/// - `EditError::Geometry` if the corners are out of order
/// - `EditError::Trim` if the rectangle lies entirely outside the image
pub fn trim(image: &RasterImage, left_up: Point, right_down: Point) -> Result<RasterImage, EditError> {
    let rect = validate_rectangle(left_up, right_down, image.width(), image.height())?;
    if misses_image(left_up, right_down, image.width(), image.height()) {
        return Err(EditError::Trim("Trim area empty".to_string()));
    }
    debug!("trim to {rect} ({}x{})", rect.width(), rect.height());

    Ok(image.crop(&rect))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
