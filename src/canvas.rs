// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::RangeInclusive;

use pxtree::{Color, Point};
use rgb::{FromSlice, RGBA8};

/// A raster surface.
///
/// All pixels are opaque, so premultiplied and straight RGBA values are the same.
/// Everything drawn outside the surface is silently clipped.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixmap: tiny_skia::Pixmap,
}

impl Canvas {
    /// Creates a new canvas filled with black.
    ///
    /// Returns `None` when the size is zero or too big.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let mut pixmap = tiny_skia::Pixmap::new(width, height)?;
        pixmap.fill(tiny_skia::Color::BLACK);
        Some(Canvas { pixmap })
    }

    /// Returns canvas width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Returns canvas height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns the underlying pixmap.
    #[inline]
    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    /// Consumes the canvas and returns the underlying pixmap.
    #[inline]
    pub fn into_pixmap(self) -> tiny_skia::Pixmap {
        self.pixmap
    }

    /// Returns a pixel color.
    ///
    /// Returns `None` when the coordinates are outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<RGBA8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        let idx = (y * self.width() + x) as usize;
        self.pixmap.data().as_rgba().get(idx).copied()
    }

    /// Fills the whole canvas with a color.
    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(tiny_skia::Color::from_rgba8(
            color.red,
            color.green,
            color.blue,
            255,
        ));
    }

    /// Draws a one pixel wide segment.
    ///
    /// Both endpoints are painted. Each step along the major axis paints
    /// the pixel nearest to the ideal line, like Bresenham does.
    /// Only the part of the major axis inside the canvas is visited.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: Color) {
        let (x1, y1) = (p1.x as i64, p1.y as i64);
        let (x2, y2) = (p2.x as i64, p2.y as i64);
        let bounds = (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2));
        if self.clip(bounds).is_none() {
            return;
        }

        let (dx, dy) = (x2 - x1, y2 - y1);
        if dx == 0 && dy == 0 {
            self.put_pixel(x1, y1, color);
        } else if dx.abs() >= dy.abs() {
            let last = self.width() as i64 - 1;
            for x in x1.min(x2).max(0)..=x1.max(x2).min(last) {
                let y = y1 + div_round((x - x1) as i128 * dy as i128, dx as i128);
                self.put_pixel(x, y, color);
            }
        } else {
            let last = self.height() as i64 - 1;
            for y in y1.min(y2).max(0)..=y1.max(y2).min(last) {
                let x = x1 + div_round((y - y1) as i128 * dx as i128, dy as i128);
                self.put_pixel(x, y, color);
            }
        }
    }

    /// Draws a filled axis-aligned ellipse.
    ///
    /// Paints every pixel for which `(x-cx)²·ry² + (y-cy)²·rx² <= rx²·ry²`.
    /// A zero radius produces a line, both zero radii produce a single pixel.
    pub fn draw_ellipse(&mut self, center: Point, radius: Point, color: Color) {
        let (cx, cy) = (center.x as i64, center.y as i64);
        let rx = (radius.x as i64).abs();
        let ry = (radius.y as i64).abs();

        let (xs, ys) = match self.clip((cx - rx, cy - ry, cx + rx, cy + ry)) {
            Some(v) => v,
            None => return,
        };

        let rx2 = (rx * rx) as i128;
        let ry2 = (ry * ry) as i128;
        let limit = rx2 * ry2;
        for y in ys {
            let dy = (y - cy) as i128;
            for x in xs.clone() {
                let dx = (x - cx) as i128;
                if dx * dx * ry2 + dy * dy * rx2 <= limit {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Draws a filled polygon.
    ///
    /// The polygon is closed implicitly. Pixels are filled using the even-odd rule
    /// and every edge is painted as well, so the outline is always covered.
    pub fn draw_polygon(&mut self, points: &[Point], color: Color) {
        if points.is_empty() {
            return;
        }

        let bounds = points.iter().fold(
            (i64::MAX, i64::MAX, i64::MIN, i64::MIN),
            |(l, t, r, b), p| {
                let (x, y) = (p.x as i64, p.y as i64);
                (l.min(x), t.min(y), r.max(x), b.max(y))
            },
        );

        if let Some((xs, ys)) = self.clip(bounds) {
            for y in ys {
                for x in xs.clone() {
                    if is_inside(points, x, y) {
                        self.put_pixel(x, y, color);
                    }
                }
            }
        }

        for (i, p) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            self.draw_line(*p, next, color);
        }
    }

    /// Saves the canvas as a PNG file.
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), png::EncodingError> {
        self.pixmap.save_png(path)
    }

    /// Encodes the canvas into PNG data.
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        self.pixmap.encode_png()
    }

    /// Intersects inclusive `(left, top, right, bottom)` bounds with the canvas.
    ///
    /// Returns inclusive column and row ranges.
    fn clip(
        &self,
        bounds: (i64, i64, i64, i64),
    ) -> Option<(RangeInclusive<i64>, RangeInclusive<i64>)> {
        let (left, top, right, bottom) = bounds;
        let left = left.max(0);
        let top = top.max(0);
        let right = right.min(self.width() as i64 - 1);
        let bottom = bottom.min(self.height() as i64 - 1);

        if left > right || top > bottom {
            return None;
        }

        Some((left..=right, top..=bottom))
    }

    fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }

        let idx = (y * self.width() as i64 + x) as usize;
        let data = self.pixmap.data_mut().as_rgba_mut();
        data[idx] = RGBA8::new(color.red, color.green, color.blue, 255);
    }
}

/// Checks that a pixel is inside a polygon using the even-odd rule.
///
/// Edges are intersected with integer math, so the result is exact.
fn is_inside(points: &[Point], x: i64, y: i64) -> bool {
    let (x, y) = (x as i128, y as i128);
    let mut inside = false;
    let mut prev = points[points.len() - 1];
    for curr in points {
        let (ax, ay) = (curr.x as i128, curr.y as i128);
        let (bx, by) = (prev.x as i128, prev.y as i128);
        if (ay > y) != (by > y) {
            // Same as `x < ax + (y - ay) * (bx - ax) / (by - ay)`.
            let lhs = (x - ax) * (by - ay);
            let rhs = (y - ay) * (bx - ax);
            let is_left = if by > ay { lhs < rhs } else { lhs > rhs };
            if is_left {
                inside = !inside;
            }
        }

        prev = *curr;
    }

    inside
}

/// Divides and rounds to the nearest integer, halves go up.
fn div_round(num: i128, den: i128) -> i64 {
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    (2 * num + den).div_euclid(2 * den) as i64
}
