//! Copying a region to another position of the same image.

use log::debug;

use crate::error::EditError;
use crate::geometry::{validate_rectangle, Point};
use crate::raster::RasterImage;

/// Copy the inclusive source rectangle so its top-left lands on `dest`.
///
/// The source region is snapshotted before pasting, so overlapping source
/// and destination regions copy the original pixels. Whatever extends past
/// the right or bottom edge is dropped.
///
/// A `dest` outside the image is not an error: the call succeeds and leaves
/// the image untouched. Circle centers, by contrast, are rejected when out of
/// bounds; both behaviors are kept as they are.
///
/// # Errors
///
/// `EditError::Geometry` if the source corners are out of order.
pub fn copy_region(
    image: &mut RasterImage,
    left_up: Point,
    right_down: Point,
    dest: Point,
) -> Result<(), EditError> {
    let rect = validate_rectangle(left_up, right_down, image.width(), image.height())?;

    if !dest.is_within(image.width(), image.height()) {
        debug!("copy destination {dest} outside image, nothing to do");
        return Ok(());
    }
    debug!("copy {rect} to {dest}");

    let region = image.crop(&rect);
    image.paste(&region, dest.x as u32, dest.y as u32);
    Ok(())
}
