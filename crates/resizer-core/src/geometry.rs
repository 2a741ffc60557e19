#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are CSS pixels in `f64`. A box field that the host supplied
//! as an arbitrary length expression (`"50%"`, `"calc(100% - 2rem)"`) is kept
//! as [`Length::Raw`] and never participates in constraint arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw length that dimension synchronization leaves untouched.
pub const AUTO: &str = "auto";

/// One box field: either pixels or an opaque CSS length expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    /// Numeric pixels; participates in clamping.
    Px(f64),
    /// Opaque expression passed through to the style projection verbatim.
    Raw(String),
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Construct a raw length expression.
    #[must_use]
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    /// Pixel value, if numeric.
    #[must_use]
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px(value) => Some(*value),
            Self::Raw(_) => None,
        }
    }

    /// Whether this length is numeric.
    #[must_use]
    pub const fn is_px(&self) -> bool {
        matches!(self, Self::Px(_))
    }

    /// Whether this is the `"auto"` sentinel.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Raw(expr) if expr == AUTO)
    }

    /// CSS length text: `"{n}px"` for pixels, the expression otherwise.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(value) => format!("{value}px"),
            Self::Raw(expr) => expr.clone(),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for Length {
    fn from(expr: &str) -> Self {
        Self::Raw(expr.to_owned())
    }
}

impl From<String> for Length {
    fn from(expr: String) -> Self {
        Self::Raw(expr)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{value}px"),
            Self::Raw(expr) => f.write_str(expr),
        }
    }
}

/// A pointer or offset position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rendered rectangle in client coordinates (a bounding-rect measurement).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[must_use]
    pub const fn from_extent(extent: Extent) -> Self {
        Self::new(0.0, 0.0, extent.width, extent.height)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[must_use]
    pub const fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }
}

/// Size limits. A missing maximum is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
}

impl SizeBounds {
    /// Clamp a width into `[min_width, max_width]`.
    ///
    /// The maximum is applied last, so it wins when the bounds cross.
    #[must_use]
    pub fn clamp_width(&self, width: f64) -> f64 {
        clamp_ordered(width, self.min_width, self.max_width)
    }

    /// Clamp a height into `[min_height, max_height]`.
    #[must_use]
    pub fn clamp_height(&self, height: f64) -> f64 {
        clamp_ordered(height, self.min_height, self.max_height)
    }
}

// `f64::clamp` panics on crossed bounds; callers may configure min > max.
fn clamp_ordered(value: f64, min: f64, max: Option<f64>) -> f64 {
    let floored = if value < min { min } else { value };
    match max {
        Some(max) if floored > max => max,
        _ => floored,
    }
}

/// The box carried by every notification payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    pub left: Length,
    pub top: Length,
    /// `None` until the width has been synchronized or configured.
    pub width: Option<Length>,
    pub height: Option<Length>,
}
