//! Image decoding.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use log::debug;

use crate::error::EditError;
use crate::raster::RasterImage;

/// Decode BMP or PNG bytes into an RGB image.
///
/// Images with an alpha channel or a different bit depth are converted to
/// 8-bit RGB; alpha is dropped.
///
/// # Errors
///
/// Returns `EditError::FileFormat` if the bytes are not a supported image.
pub fn decode_bytes(bytes: &[u8]) -> Result<RasterImage, EditError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EditError::FileFormat(format!("Incorrect input file: {e}")))?;

    if reader.format().is_none() {
        return Err(EditError::FileFormat("Unsupported image format".to_string()));
    }

    let img = reader
        .decode()
        .map_err(|e| EditError::FileFormat(format!("Incorrect input file: {e}")))?;

    Ok(RasterImage::from_rgb_image(img.into_rgb8()))
}

/// Read and decode the image at `path`.
///
/// # Errors
///
/// Returns `EditError::FileFormat` if `path` is not a readable file or does
/// not hold a supported image.
pub fn decode_file(path: &Path) -> Result<RasterImage, EditError> {
    if !path.is_file() {
        return Err(EditError::FileFormat("Incorrect input file".to_string()));
    }
    let bytes = std::fs::read(path)
        .map_err(|e| EditError::FileFormat(format!("Incorrect input file: {e}")))?;

    let image = decode_bytes(&bytes)?;
    debug!(
        "decoded {} ({}x{}, {} bytes)",
        path.display(),
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(image)
}

/// File facts reported by `--info` and stored in the processing log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Size of the file on disk in bytes.
    pub file_size: u64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Detected container format, e.g. `BMP` or `PNG`.
    pub format: Option<String>,
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File information:")?;
        writeln!(f, "File size: {}", self.file_size)?;
        writeln!(f, "Width: {}", self.width)?;
        write!(f, "Height: {}", self.height)
    }
}

/// Read size, dimensions and format of an image file without decoding its
/// pixels.
///
/// # Errors
///
/// Returns `EditError::FileFormat` if the file cannot be opened or its
/// header is not a supported image.
pub fn probe_file(path: &Path) -> Result<ImageInfo, EditError> {
    let bad_input = |e: &dyn fmt::Display| EditError::FileFormat(format!("Incorrect input file: {e}"));

    let file_size = std::fs::metadata(path).map_err(|e| bad_input(&e))?.len();
    let reader = ImageReader::open(path)
        .map_err(|e| bad_input(&e))?
        .with_guessed_format()
        .map_err(|e| bad_input(&e))?;
    let format = reader
        .format()
        .and_then(|f| f.extensions_str().first())
        .map(|ext| ext.to_uppercase());
    let (width, height) = reader.into_dimensions().map_err(|e| bad_input(&e))?;

    Ok(ImageInfo {
        file_size,
        width,
        height,
        format,
    })
}
