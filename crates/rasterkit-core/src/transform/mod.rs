//! Geometric transforms: rotation, mirroring, trimming, copying and tiling.
//!
//! # Coordinate System
//!
//! - Rectangles are given as raw `left_up`/`right_down` points, ordered and
//!   clamped with [`validate_rectangle`](crate::geometry::validate_rectangle)
//! - Regions are inclusive of both corners
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Origin is top-left corner
//!
//! # Ownership
//!
//! [`rotate_region`], [`mirror_region`] and [`copy_region`] edit the image in
//! place. [`trim`] and [`collage`] return a freshly allocated image and leave
//! their input untouched.

mod collage;
mod copy;
mod crop;
mod mirror;
mod rotation;

pub use collage::collage;
pub use copy::copy_region;
pub use crop::trim;
pub use mirror::{mirror_region, MirrorAxis};
pub use rotation::{rotate_region, RightAngle};
