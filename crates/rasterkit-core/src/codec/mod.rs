//! Reading and writing image files.
//!
//! This module provides functionality for:
//! - Decoding BMP and PNG files into a [`RasterImage`](crate::raster::RasterImage)
//! - Encoding a `RasterImage` back to BMP or PNG, picked by file extension
//! - Reporting basic file information for `--info`
//!
//! # Atomic Output
//!
//! Output is encoded fully in memory, written to a temporary file next to
//! the destination and then renamed into place. A failed encode or write
//! never leaves a half-written output file behind.

mod decode;
mod encode;

pub use decode::{decode_bytes, decode_file, probe_file, ImageInfo};
pub use encode::{encode_bytes, encode_file, ensure_distinct_paths};
