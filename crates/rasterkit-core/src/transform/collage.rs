//! Tiling an image into a grid.

use log::debug;

use crate::error::EditError;
use crate::raster::RasterImage;

/// Tile `image` `number_x` times across and `number_y` times down.
///
/// Returns a new `(width * number_x)`×`(height * number_y)` image; the
/// source is left unmodified.
///
/// # Errors
///
/// - `EditError::Arguments` if either count is not strictly positive
/// - `EditError::Memory` if the output size overflows or cannot be allocated
pub fn collage(image: &RasterImage, number_x: i64, number_y: i64) -> Result<RasterImage, EditError> {
    if number_x <= 0 || number_y <= 0 {
        return Err(EditError::args("Number of tiles must be positive"));
    }

    let too_large = || {
        EditError::Memory(format!(
            "collage of {number_x}x{number_y} tiles of {}x{} is too large",
            image.width(),
            image.height()
        ))
    };
    let out_width = u32::try_from(number_x)
        .ok()
        .and_then(|n| image.width().checked_mul(n))
        .ok_or_else(too_large)?;
    let out_height = u32::try_from(number_y)
        .ok()
        .and_then(|n| image.height().checked_mul(n))
        .ok_or_else(too_large)?;
    let len = (out_width as usize)
        .checked_mul(out_height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(too_large)?;

    debug!("collage {number_x}x{number_y} -> {out_width}x{out_height}");

    let mut output = Vec::new();
    output.try_reserve_exact(len)?;

    for out_y in 0..out_height {
        let row = image.row(out_y % image.height());
        for _ in 0..number_x {
            output.extend_from_slice(row);
        }
    }

    Ok(RasterImage::from_parts(out_width, out_height, output))
}
