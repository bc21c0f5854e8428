//! The single operation an invocation performs.
//!
//! Each variant carries only the parameters its operation needs, already
//! parsed into typed values. Range checks that belong to an operation
//! (thickness, radius, rectangle order, tile counts) happen when the
//! operation is applied, before any pixel is touched.

use std::fmt;

use log::info;

use crate::adjust::{color_replace, rgb_filter, Channel};
use crate::draw::{draw_circle, draw_rect, Stroke};
use crate::error::EditError;
use crate::geometry::{Color, Point};
use crate::raster::RasterImage;
use crate::transform::{collage, copy_region, mirror_region, rotate_region, trim, MirrorAxis, RightAngle};

/// One raster operation with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Rectangle outline with optional fill.
    Rect {
        left_up: Point,
        right_down: Point,
        stroke: Stroke,
    },
    /// Circle outline with optional fill.
    Circle {
        center: Point,
        radius: i64,
        stroke: Stroke,
    },
    /// Quarter-turn rotation of a region.
    Rotate {
        left_up: Point,
        right_down: Point,
        angle: RightAngle,
    },
    /// Flip of a region.
    Mirror {
        axis: MirrorAxis,
        left_up: Point,
        right_down: Point,
    },
    /// Crop the image to a region.
    Trim { left_up: Point, right_down: Point },
    /// Duplicate a region at another position.
    Copy {
        left_up: Point,
        right_down: Point,
        dest: Point,
    },
    /// Exact-match color substitution.
    ColorReplace { old: Color, new: Color },
    /// Force one channel to a fixed value.
    RgbFilter { channel: Channel, value: u8 },
    /// Tile the image into a grid.
    Collage { number_x: i64, number_y: i64 },
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The image was modified in place.
    Edited,
    /// Colors were substituted in place; `replaced` pixels changed.
    Recolored { replaced: u64 },
    /// The operation produced a new image that supersedes the input.
    Replaced(RasterImage),
}

impl Outcome {
    /// The image to write out: the replacement if there is one, otherwise
    /// the (possibly edited) input.
    pub fn output<'a>(&'a self, input: &'a RasterImage) -> &'a RasterImage {
        match self {
            Outcome::Replaced(image) => image,
            Outcome::Edited | Outcome::Recolored { .. } => input,
        }
    }
}

impl Operation {
    /// Short operation name, as used in flags and help topics.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Rect { .. } => "rect",
            Operation::Circle { .. } => "circle",
            Operation::Rotate { .. } => "rotate",
            Operation::Mirror { .. } => "mirror",
            Operation::Trim { .. } => "trim",
            Operation::Copy { .. } => "copy",
            Operation::ColorReplace { .. } => "color_replace",
            Operation::RgbFilter { .. } => "rgbfilter",
            Operation::Collage { .. } => "collage",
        }
    }

    /// Apply the operation to `image`.
    ///
    /// In-place operations edit `image` directly. Trim and collage leave it
    /// untouched and return the new image in [`Outcome::Replaced`].
    ///
    /// On error `image` is unchanged: every check runs before the first
    /// pixel is written.
    pub fn apply(&self, image: &mut RasterImage) -> Result<Outcome, EditError> {
        info!("applying {self} to {}x{} image", image.width(), image.height());

        match self {
            Operation::Rect {
                left_up,
                right_down,
                stroke,
            } => draw_rect(image, *left_up, *right_down, stroke).map(|()| Outcome::Edited),
            Operation::Circle {
                center,
                radius,
                stroke,
            } => draw_circle(image, *center, *radius, stroke).map(|()| Outcome::Edited),
            Operation::Rotate {
                left_up,
                right_down,
                angle,
            } => rotate_region(image, *left_up, *right_down, *angle).map(|()| Outcome::Edited),
            Operation::Mirror {
                axis,
                left_up,
                right_down,
            } => mirror_region(image, *axis, *left_up, *right_down).map(|()| Outcome::Edited),
            Operation::Trim {
                left_up,
                right_down,
            } => trim(image, *left_up, *right_down).map(Outcome::Replaced),
            Operation::Copy {
                left_up,
                right_down,
                dest,
            } => copy_region(image, *left_up, *right_down, *dest).map(|()| Outcome::Edited),
            Operation::ColorReplace { old, new } => Ok(Outcome::Recolored {
                replaced: color_replace(image, *old, *new),
            }),
            Operation::RgbFilter { channel, value } => {
                rgb_filter(image, *channel, *value);
                Ok(Outcome::Edited)
            }
            Operation::Collage { number_x, number_y } => {
                collage(image, *number_x, *number_y).map(Outcome::Replaced)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.name())?;
        match self {
            Operation::Rect {
                left_up,
                right_down,
                stroke,
            } => {
                write!(f, " --left_up {left_up} --right_down {right_down}")?;
                write_stroke(f, stroke)
            }
            Operation::Circle {
                center,
                radius,
                stroke,
            } => {
                write!(f, " --center {center} --radius {radius}")?;
                write_stroke(f, stroke)
            }
            Operation::Rotate {
                left_up,
                right_down,
                angle,
            } => write!(f, " --left_up {left_up} --right_down {right_down} --angle {angle}"),
            Operation::Mirror {
                axis,
                left_up,
                right_down,
            } => {
                let axis = match axis {
                    MirrorAxis::X => "x",
                    MirrorAxis::Y => "y",
                };
                write!(f, " --axis {axis} --left_up {left_up} --right_down {right_down}")
            }
            Operation::Trim {
                left_up,
                right_down,
            } => write!(f, " --left_up {left_up} --right_down {right_down}"),
            Operation::Copy {
                left_up,
                right_down,
                dest,
            } => write!(
                f,
                " --left_up {left_up} --right_down {right_down} --dest_left_up {dest}"
            ),
            Operation::ColorReplace { old, new } => {
                write!(f, " --old_color {old} --new_color {new}")
            }
            Operation::RgbFilter { channel, value } => {
                write!(f, " --component_name {channel} --component_value {value}")
            }
            Operation::Collage { number_x, number_y } => {
                write!(f, " --number_x {number_x} --number_y {number_y}")
            }
        }
    }
}

fn write_stroke(f: &mut fmt::Formatter<'_>, stroke: &Stroke) -> fmt::Result {
    write!(f, " --thickness {} --color {}", stroke.thickness, stroke.color)?;
    if stroke.fill {
        write!(f, " --fill")?;
    }
    if let Some(fill_color) = stroke.fill_color {
        write!(f, " --fill_color {fill_color}")?;
    }
    Ok(())
}
