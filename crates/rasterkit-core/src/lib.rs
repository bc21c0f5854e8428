//! rasterkit core - command-driven raster editing
//!
//! This crate provides the editing engine behind the `rasterkit` command:
//! parameter parsing and validation, an owned RGB pixel buffer, BMP/PNG
//! codecs and the nine raster operations.
//!
//! # Pipeline
//!
//! One invocation runs exactly one operation:
//! 1. Decode the input file into a [`RasterImage`]
//! 2. Build an [`Operation`] from validated parameters
//! 3. [`Operation::apply`] edits the image in place or returns a new one
//! 4. Encode the result, only if the operation succeeded
//!
//! Every failure is an [`EditError`] that maps onto a fixed [`ExitCode`].

pub mod adjust;
pub mod codec;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod journal;
pub mod operation;
pub mod raster;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{EditError, ExitCode};
pub use geometry::{
    misses_image, parse_color, parse_point, validate_rectangle, Color, Point, Rectangle,
};
pub use operation::{Operation, Outcome};
pub use raster::RasterImage;
