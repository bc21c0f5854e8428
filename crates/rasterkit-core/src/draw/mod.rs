//! Shape drawing: outlined and optionally filled rectangles and circles.
//!
//! Both shapes draw their border *inward*: a rectangle's border of thickness
//! `t` covers the outermost `t` rows and columns of the rectangle, and a
//! circle's border covers the ring between `radius - t` and `radius`.
//! There is no anti-aliasing; a pixel is either painted or left alone.

mod circle;
mod rect;

pub use circle::draw_circle;
pub use rect::draw_rect;

use crate::error::EditError;
use crate::geometry::Color;

/// Border and fill settings shared by every shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// Border thickness in pixels. Must be positive.
    pub thickness: i64,
    /// Border color.
    pub color: Color,
    /// Whether the interior should be filled.
    pub fill: bool,
    /// Interior color. Required when `fill` is set.
    pub fill_color: Option<Color>,
}

impl Stroke {
    /// Outline-only stroke.
    pub fn outline(thickness: i64, color: Color) -> Self {
        Self {
            thickness,
            color,
            fill: false,
            fill_color: None,
        }
    }

    /// Outline plus interior fill.
    pub fn filled(thickness: i64, color: Color, fill_color: Color) -> Self {
        Self {
            thickness,
            color,
            fill: true,
            fill_color: Some(fill_color),
        }
    }

    /// Check thickness and resolve the interior color.
    ///
    /// Fill without an explicit fill color is an error; it never falls back
    /// to the border color.
    fn resolve(&self) -> Result<Option<Color>, EditError> {
        if self.thickness <= 0 {
            return Err(EditError::draw("Thickness must be positive"));
        }
        match (self.fill, self.fill_color) {
            (false, _) => Ok(None),
            (true, Some(color)) => Ok(Some(color)),
            (true, None) => Err(EditError::draw("Fill specified but no fill_color")),
        }
    }
}
