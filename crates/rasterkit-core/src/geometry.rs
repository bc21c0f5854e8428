//! Point, color and rectangle parameters.
//!
//! Command tokens use dots as separators: a point is `X.Y` and a color is
//! `R.G.B`. Parsing only checks syntax; rectangles are additionally ordered
//! and clamped against the image they will be applied to.
//!
//! # Coordinate System
//!
//! - Origin is the top-left pixel
//! - x grows to the right, y grows downwards
//! - Rectangles are inclusive: `(x1, y1)-(x2, y2)` covers columns `x1..=x2`
//!   and rows `y1..=y2`

use std::fmt;
use std::str::FromStr;

use crate::error::EditError;

/// A pixel position. May be negative or outside the image until clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Whether the point addresses a pixel of a `width`×`height` image.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width as i64 && self.y < height as i64
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_point(s)
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The color as an `[r, g, b]` pixel.
    #[inline]
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_rgb(px: [u8; 3]) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse an `X.Y` token of two signed base-10 integers.
pub fn parse_point(token: &str) -> Result<Point, EditError> {
    let invalid = || EditError::Coordinates("invalid coordinates format".to_string());

    let parts: Vec<&str> = token.split('.').collect();
    let [x, y] = parts.as_slice() else {
        return Err(invalid());
    };
    let x = x.trim().parse::<i64>().map_err(|_| invalid())?;
    let y = y.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok(Point { x, y })
}

/// Parse an `R.G.B` token with every component in `0..=255`.
///
/// A token with the wrong number of components reports "invalid color
/// format"; anything else reports "Incorrect color". Both are the same
/// error kind.
pub fn parse_color(token: &str) -> Result<Color, EditError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(EditError::Color("invalid color format".to_string()));
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(parts) {
        let value = part
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| EditError::Color("Incorrect color".to_string()))?;
        *slot = value;
    }
    Ok(Color::from_rgb(rgb))
}

/// An inclusive pixel rectangle that has been ordered and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub left_up: Point,
    pub right_down: Point,
}

impl Rectangle {
    /// Leftmost column.
    pub fn left(&self) -> u32 {
        self.left_up.x as u32
    }

    /// Topmost row.
    pub fn top(&self) -> u32 {
        self.left_up.y as u32
    }

    /// Rightmost column (inclusive).
    pub fn right(&self) -> u32 {
        self.right_down.x as u32
    }

    /// Bottom row (inclusive).
    pub fn bottom(&self) -> u32 {
        self.right_down.y as u32
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        self.right() - self.left() + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        self.bottom() - self.top() + 1
    }

    /// Whether `(x, y)` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.left_up, self.right_down)
    }
}

/// Check corner order on the raw points, then clamp each coordinate into
/// `[0, dimension - 1]`.
///
/// The order is never re-checked after clamping. A rectangle lying wholly
/// outside the image still clamps onto its nearest edge; callers that need
/// real pixels check [`misses_image`] on the raw corners.
pub fn validate_rectangle(
    left_up: Point,
    right_down: Point,
    width: u32,
    height: u32,
) -> Result<Rectangle, EditError> {
    if left_up.x >= right_down.x || left_up.y >= right_down.y {
        return Err(EditError::Geometry);
    }

    let max_x = (width as i64 - 1).max(0);
    let max_y = (height as i64 - 1).max(0);
    let clamp = |p: Point| Point::new(p.x.clamp(0, max_x), p.y.clamp(0, max_y));

    Ok(Rectangle {
        left_up: clamp(left_up),
        right_down: clamp(right_down),
    })
}

/// Whether the raw rectangle shares no pixel with a `width`×`height` image.
///
/// Clamping keeps every rectangle inside the image, so a rectangle that was
/// entirely to one side of it ends up as a one-pixel strip along the edge.
/// This tells such a strip apart from a real one-pixel overlap.
pub fn misses_image(left_up: Point, right_down: Point, width: u32, height: u32) -> bool {
    width == 0
        || height == 0
        || right_down.x < 0
        || right_down.y < 0
        || left_up.x >= width as i64
        || left_up.y >= height as i64
}
