//! Image encoding.
//!
//! The output format follows the destination's extension: `.bmp` or `.png`.

use std::io::{Cursor, Write};
use std::path::Path;

use image::{ExtendedColorType, ImageFormat};
use log::debug;

use crate::error::EditError;
use crate::raster::RasterImage;

/// Encode an image into an in-memory file of the given format.
///
/// # Errors
///
/// Returns `EditError::Io` if the format is not BMP or PNG or encoding fails.
pub fn encode_bytes(image: &RasterImage, format: ImageFormat) -> Result<Vec<u8>, EditError> {
    if !matches!(format, ImageFormat::Bmp | ImageFormat::Png) {
        return Err(EditError::Io(format!(
            "Unsupported output format: {format:?}"
        )));
    }

    let mut buffer = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut buffer,
        image.pixels(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
        format,
    )
    .map_err(|e| EditError::Io(format!("Error saving image: {e}")))?;

    Ok(buffer.into_inner())
}

/// Encode `image` and write it to `path`, replacing any existing file.
///
/// The bytes go to a temporary file in the destination directory first and
/// are renamed into place only once fully written.
///
/// # Errors
///
/// Returns `EditError::Io` if the extension is not a supported format or the
/// file cannot be written.
pub fn encode_file(image: &RasterImage, path: &Path) -> Result<(), EditError> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| EditError::Io("Error saving image: unknown output format".to_string()))?;
    let bytes = encode_bytes(image, format)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |e: std::io::Error| EditError::Io(format!("Error saving image: {e}"));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    debug!("wrote {} ({} bytes, {format:?})", path.display(), bytes.len());
    Ok(())
}

/// Fail if `input` and `output` name the same file.
///
/// Paths are compared after making them absolute; existing files are also
/// compared after resolving symlinks.
pub fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<(), EditError> {
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => match (std::path::absolute(input), std::path::absolute(output)) {
            (Ok(a), Ok(b)) => a == b,
            _ => input == output,
        },
    };

    if same {
        return Err(EditError::Io(
            "Input and output files cannot be the same".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_file;
    use crate::error::ExitCode;
    use crate::test_helpers::gradient;

    #[test]
    fn test_encode_png_magic() {
        let bytes = encode_bytes(&gradient(4, 4), ImageFormat::Png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_encode_unsupported_format() {
        let err = encode_bytes(&gradient(4, 4), ImageFormat::Jpeg).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Io);
    }

    #[test]
    fn test_encode_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let img = gradient(5, 3);

        for name in ["out.bmp", "out.png"] {
            let path = dir.path().join(name);
            encode_file(&img, &path).unwrap();
            assert_eq!(decode_file(&path).unwrap(), img);
        }
    }

    #[test]
    fn test_encode_file_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.nope");
        let err = encode_file(&gradient(2, 2), &path).unwrap_err();

        assert_eq!(err.exit_code(), ExitCode::Io);
        assert!(!path.exists());
    }

    #[test]
    fn test_encode_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = encode_file(&gradient(2, 2), &path).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Io);
    }

    #[test]
    fn test_no_leftover_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        encode_file(&gradient(3, 3), &dir.path().join("a.png")).unwrap();
        let _ = encode_file(&gradient(3, 3), &dir.path().join("b.nope"));

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.png")]);
    }

    #[test]
    fn test_same_paths_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bmp");
        std::fs::write(&input, b"x").unwrap();

        let err = ensure_distinct_paths(&input, &dir.path().join(".").join("in.bmp")).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Io);

        ensure_distinct_paths(&input, &dir.path().join("out.bmp")).unwrap();
    }
}
