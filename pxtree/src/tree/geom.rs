// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// An integer point.
///
/// All operations return a new point.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new `Point` from values.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Moves the point by a vector.
    ///
    /// Coordinates saturate at the `i32` bounds.
    #[inline]
    pub fn translate(self, t: Point) -> Self {
        Point::new(self.x.saturating_add(t.x), self.y.saturating_add(t.y))
    }

    /// Scales the point's distance to `origin` by `factor`.
    ///
    /// Coordinates saturate at the `i32` bounds.
    #[inline]
    pub fn scale(self, origin: Point, factor: i32) -> Self {
        let scale = |v: i32, o: i32| {
            let d = (v as i64 - o as i64).saturating_mul(factor as i64);
            clamp_i32(d.saturating_add(o as i64))
        };

        Point::new(scale(self.x, origin.x), scale(self.y, origin.y))
    }

    /// Rotates the point around `origin`.
    ///
    /// Positive angles turn the X axis towards the Y axis, so with the Y axis
    /// pointing down the rotation is clockwise on screen:
    /// `(1, 0)` rotated by 90 degrees around `(0, 0)` becomes `(0, 1)`.
    ///
    /// Multiples of 90 degrees are exact. Other angles are rounded
    /// to the nearest integer.
    pub fn rotate(self, origin: Point, degrees: i32) -> Self {
        let dx = self.x as i64 - origin.x as i64;
        let dy = self.y as i64 - origin.y as i64;

        let (x, y) = match degrees.rem_euclid(360) {
            0 => (dx, dy),
            90 => (-dy, dx),
            180 => (-dx, -dy),
            270 => (dy, -dx),
            n => {
                let (sin, cos) = (n as f64).to_radians().sin_cos();
                let dx = dx as f64;
                let dy = dy as f64;
                (
                    (dx * cos - dy * sin).round() as i64,
                    (dx * sin + dy * cos).round() as i64,
                )
            }
        };

        Point::new(
            clamp_i32(origin.x as i64 + x),
            clamp_i32(origin.y as i64 + y),
        )
    }
}

/// Clamps a wide integer to the `i32` range.
#[inline]
pub(crate) fn clamp_i32(n: i64) -> i32 {
    n.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl std::ops::Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        self.translate(other)
    }
}

impl std::ops::Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from(v: (i32, i32)) -> Self {
        Point::new(v.0, v.1)
    }
}

/// An 8-bit RGB color.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Constructs a new `Color` from RGB values.
    #[inline]
    pub const fn new_rgb(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    /// Constructs a new `Color` set to black.
    #[inline]
    pub const fn black() -> Color {
        Color::new_rgb(0, 0, 0)
    }

    /// Constructs a new `Color` set to white.
    #[inline]
    pub const fn white() -> Color {
        Color::new_rgb(255, 255, 255)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

/// A 2D integer size representation.
///
/// Width and height are guarantee to be > 0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IntSize {
    width: u32,
    height: u32,
}

impl IntSize {
    /// Creates a new `IntSize` from values.
    #[inline]
    pub fn from_wh(width: u32, height: u32) -> Option<Self> {
        if width > 0 && height > 0 {
            Some(IntSize { width, height })
        } else {
            None
        }
    }

    /// Returns width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns width and height as a tuple.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// An integer rectangle.
///
/// Covers pixels from `x` to `x + width - 1` inclusive.
/// Width and height are guarantee to be > 0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IntRect {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl IntRect {
    /// Creates a new `IntRect` from values.
    #[inline]
    pub fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Option<Self> {
        if width > 0 && height > 0 {
            Some(IntRect {
                x,
                y,
                width,
                height,
            })
        } else {
            None
        }
    }

    /// Creates a rectangle that covers all the points, inclusive.
    ///
    /// Returns `None` for an empty list.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut left, mut top, mut right, mut bottom) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            left = left.min(p.x);
            top = top.min(p.y);
            right = right.max(p.x);
            bottom = bottom.max(p.y);
        }

        Self::from_ltrb(left, top, right, bottom)
    }

    /// Creates a rectangle from inclusive edges.
    #[inline]
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        if left > right || top > bottom {
            return None;
        }

        let width = u32::try_from(right as i64 - left as i64 + 1).ok()?;
        let height = u32::try_from(bottom as i64 - top as i64 + 1).ok()?;
        Self::from_xywh(left, top, width, height)
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the last covered column.
    #[inline]
    pub fn right(&self) -> i32 {
        (self.x as i64 + self.width as i64 - 1) as i32
    }

    /// Returns the last covered row.
    #[inline]
    pub fn bottom(&self) -> i32 {
        (self.y as i64 + self.height as i64 - 1) as i32
    }

    /// Returns a rectangle covering both rectangles.
    pub fn union(&self, other: &IntRect) -> IntRect {
        IntRect::from_ltrb(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
        .unwrap_or(*self)
    }
}
