// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod geom;

pub use geom::*;

/// A scene tree.
///
/// Produced by [`Tree::from_str`] and friends.
/// Owns every shape; dropping the tree releases the whole scene.
#[derive(Clone, Debug)]
pub struct Tree {
    /// Image size.
    ///
    /// Taken from the `width` and `height` attributes of the root element.
    pub size: IntSize,

    /// Top-level shapes in document order.
    ///
    /// Later shapes paint over earlier ones.
    pub root: Vec<Shape>,
}

impl Tree {
    /// Returns a shape by its ID.
    ///
    /// Searches the whole scene in document order.
    pub fn node_by_id(&self, id: &str) -> Option<&Shape> {
        if id.is_empty() {
            return None;
        }

        self.root.iter().find_map(|shape| shape.find_by_id(id))
    }
}

/// A drawable shape.
///
/// A closed set of variants behind a uniform transform and duplicate contract.
/// Specialized variants (`Circle`, `Line`, `Rect`) keep their own tag
/// through transforms and duplication.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum Shape {
    Ellipse(Ellipse),
    Circle(Circle),
    Polyline(Polyline),
    Line(Line),
    Polygon(Polygon),
    Rect(Rect),
    Group(Group),
}

impl Shape {
    /// Returns shape's ID.
    ///
    /// Can be empty.
    pub fn id(&self) -> &str {
        match self {
            Shape::Ellipse(ref e) => &e.id,
            Shape::Circle(ref e) => &e.0.id,
            Shape::Polyline(ref e) => &e.id,
            Shape::Line(ref e) => &e.0.id,
            Shape::Polygon(ref e) => &e.id,
            Shape::Rect(ref e) => &e.0.id,
            Shape::Group(ref e) => &e.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: String) {
        match self {
            Shape::Ellipse(ref mut e) => e.id = id,
            Shape::Circle(ref mut e) => e.0.id = id,
            Shape::Polyline(ref mut e) => e.id = id,
            Shape::Line(ref mut e) => e.0.id = id,
            Shape::Polygon(ref mut e) => e.id = id,
            Shape::Rect(ref mut e) => e.0.id = id,
            Shape::Group(ref mut e) => e.id = id,
        }
    }

    /// Returns shape's color.
    ///
    /// Used as a fill by ellipses and polygons and as a stroke by polylines.
    pub fn color(&self) -> Color {
        match self {
            Shape::Ellipse(ref e) => e.color,
            Shape::Circle(ref e) => e.0.color,
            Shape::Polyline(ref e) => e.color,
            Shape::Line(ref e) => e.0.color,
            Shape::Polygon(ref e) => e.color,
            Shape::Rect(ref e) => e.0.color,
            Shape::Group(ref e) => e.color,
        }
    }

    /// Moves the shape by a vector.
    pub fn translate(&mut self, t: Point) {
        match self {
            Shape::Ellipse(ref mut e) => e.translate(t),
            Shape::Circle(ref mut e) => e.0.translate(t),
            Shape::Polyline(ref mut e) => e.translate(t),
            Shape::Line(ref mut e) => e.0.translate(t),
            Shape::Polygon(ref mut e) => e.translate(t),
            Shape::Rect(ref mut e) => e.0.translate(t),
            Shape::Group(ref mut e) => e.translate(t),
        }
    }

    /// Scales the shape around `origin`.
    pub fn scale(&mut self, origin: Point, factor: i32) {
        match self {
            Shape::Ellipse(ref mut e) => e.scale(origin, factor),
            Shape::Circle(ref mut e) => e.0.scale(origin, factor),
            Shape::Polyline(ref mut e) => e.scale(origin, factor),
            Shape::Line(ref mut e) => e.0.scale(origin, factor),
            Shape::Polygon(ref mut e) => e.scale(origin, factor),
            Shape::Rect(ref mut e) => e.0.scale(origin, factor),
            Shape::Group(ref mut e) => e.scale(origin, factor),
        }
    }

    /// Rotates the shape around `origin`.
    ///
    /// See [`Point::rotate`] for the direction.
    pub fn rotate(&mut self, origin: Point, degrees: i32) {
        match self {
            Shape::Ellipse(ref mut e) => e.rotate(origin, degrees),
            Shape::Circle(ref mut e) => e.0.rotate(origin, degrees),
            Shape::Polyline(ref mut e) => e.rotate(origin, degrees),
            Shape::Line(ref mut e) => e.0.rotate(origin, degrees),
            Shape::Polygon(ref mut e) => e.rotate(origin, degrees),
            Shape::Rect(ref mut e) => e.0.rotate(origin, degrees),
            Shape::Group(ref mut e) => e.rotate(origin, degrees),
        }
    }

    /// Returns an independent deep copy of the shape.
    ///
    /// The copy keeps the variant, the geometry, the color and the ID.
    /// Group children are duplicated as well, so nothing is shared
    /// with the original.
    #[inline]
    pub fn duplicate(&self) -> Shape {
        self.clone()
    }

    /// Returns the pixel bounds the shape can paint.
    ///
    /// Returns `None` for shapes without points, for empty groups
    /// and for bounds wider than `u32::MAX`.
    pub fn bounding_box(&self) -> Option<IntRect> {
        match self {
            Shape::Ellipse(ref e) => e.bounding_box(),
            Shape::Circle(ref e) => e.0.bounding_box(),
            Shape::Polyline(ref e) => IntRect::from_points(&e.points),
            Shape::Line(ref e) => IntRect::from_points(&e.0.points),
            Shape::Polygon(ref e) => IntRect::from_points(&e.points),
            Shape::Rect(ref e) => IntRect::from_points(&e.0.points),
            Shape::Group(ref e) => e.bounding_box(),
        }
    }

    /// Returns the shape at `path`, where each index selects a group child.
    ///
    /// An empty path returns `self`.
    pub(crate) fn descendant(&self, path: &[usize]) -> Option<&Shape> {
        match path.split_first() {
            None => Some(self),
            Some((idx, rest)) => match self {
                Shape::Group(ref g) => g.children.get(*idx)?.descendant(rest),
                _ => None,
            },
        }
    }

    fn find_by_id(&self, id: &str) -> Option<&Shape> {
        if self.id() == id {
            return Some(self);
        }

        match self {
            Shape::Group(ref g) => g.children.iter().find_map(|c| c.find_by_id(id)),
            _ => None,
        }
    }
}

/// An ellipse.
///
/// `ellipse` element in SVG.
#[derive(Clone, PartialEq, Debug)]
pub struct Ellipse {
    /// Element's ID.
    ///
    /// Can be empty.
    pub(crate) id: String,

    /// Fill color.
    pub(crate) color: Color,

    /// Ellipse center.
    pub(crate) center: Point,

    /// Semi-axes. `x` and `y` are independent.
    pub(crate) radius: Point,
}

impl Ellipse {
    /// Creates a new ellipse.
    pub fn new(id: String, color: Color, center: Point, radius: Point) -> Self {
        Ellipse {
            id,
            color,
            center,
            radius,
        }
    }

    /// Returns element's ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns fill color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns ellipse center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns semi-axes.
    #[inline]
    pub fn radius(&self) -> Point {
        self.radius
    }

    fn translate(&mut self, t: Point) {
        self.center = self.center.translate(t);
    }

    fn scale(&mut self, origin: Point, factor: i32) {
        self.radius.x = self.radius.x.saturating_mul(factor);
        self.radius.y = self.radius.y.saturating_mul(factor);
        self.center = self.center.scale(origin, factor);
    }

    // Semi-axes stay aligned with the canvas, only the center moves.
    fn rotate(&mut self, origin: Point, degrees: i32) {
        self.center = self.center.rotate(origin, degrees);
    }

    fn bounding_box(&self) -> Option<IntRect> {
        let rx = self.radius.x.saturating_abs();
        let ry = self.radius.y.saturating_abs();
        IntRect::from_ltrb(
            self.center.x.saturating_sub(rx),
            self.center.y.saturating_sub(ry),
            self.center.x.saturating_add(rx),
            self.center.y.saturating_add(ry),
        )
    }
}

/// A circle.
///
/// `circle` element in SVG. An ellipse with equal semi-axes.
#[derive(Clone, PartialEq, Debug)]
pub struct Circle(Ellipse);

impl Circle {
    /// Creates a new circle.
    pub fn new(id: String, color: Color, center: Point, radius: i32) -> Self {
        Circle(Ellipse {
            id,
            color,
            center,
            radius: Point::new(radius, radius),
        })
    }

    /// Returns the circle as an ellipse.
    #[inline]
    pub fn as_ellipse(&self) -> &Ellipse {
        &self.0
    }

    /// Returns the circle radius.
    #[inline]
    pub fn radius(&self) -> i32 {
        self.0.radius.x
    }
}

/// An open polyline.
///
/// `polyline` element in SVG. Drawn as `points.len() - 1` connected segments.
#[derive(Clone, PartialEq, Debug)]
pub struct Polyline {
    /// Element's ID.
    ///
    /// Can be empty.
    pub(crate) id: String,

    /// Stroke color.
    pub(crate) color: Color,

    /// Vertices in drawing order.
    pub(crate) points: Vec<Point>,
}

impl Polyline {
    /// Creates a new polyline.
    pub fn new(id: String, color: Color, points: Vec<Point>) -> Self {
        Polyline { id, color, points }
    }

    /// Returns element's ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns stroke color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns vertices in drawing order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn translate(&mut self, t: Point) {
        translate_points(&mut self.points, t);
    }

    fn scale(&mut self, origin: Point, factor: i32) {
        scale_points(&mut self.points, origin, factor);
    }

    fn rotate(&mut self, origin: Point, degrees: i32) {
        rotate_points(&mut self.points, origin, degrees);
    }
}

/// A line segment.
///
/// `line` element in SVG. A polyline with exactly two points.
#[derive(Clone, PartialEq, Debug)]
pub struct Line(Polyline);

impl Line {
    /// Creates a new line.
    pub fn new(id: String, color: Color, start: Point, end: Point) -> Self {
        Line(Polyline {
            id,
            color,
            points: vec![start, end],
        })
    }

    /// Returns the line as a polyline.
    #[inline]
    pub fn as_polyline(&self) -> &Polyline {
        &self.0
    }

    /// Returns the start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.0.points[0]
    }

    /// Returns the end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.0.points[1]
    }
}

/// A closed polygon.
///
/// `polygon` element in SVG. The last point connects back to the first one.
#[derive(Clone, PartialEq, Debug)]
pub struct Polygon {
    /// Element's ID.
    ///
    /// Can be empty.
    pub(crate) id: String,

    /// Fill color.
    pub(crate) color: Color,

    /// Vertices in drawing order.
    pub(crate) points: Vec<Point>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(id: String, color: Color, points: Vec<Point>) -> Self {
        Polygon { id, color, points }
    }

    /// Returns element's ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns fill color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns vertices in drawing order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn translate(&mut self, t: Point) {
        translate_points(&mut self.points, t);
    }

    fn scale(&mut self, origin: Point, factor: i32) {
        scale_points(&mut self.points, origin, factor);
    }

    fn rotate(&mut self, origin: Point, degrees: i32) {
        rotate_points(&mut self.points, origin, degrees);
    }
}

/// A rectangle.
///
/// `rect` element in SVG. Stored as a four-corner polygon, so it stays
/// exact under rotation.
#[derive(Clone, PartialEq, Debug)]
pub struct Rect(Polygon);

impl Rect {
    /// Creates a new rectangle covering `width` x `height` pixels starting at `(x, y)`.
    ///
    /// Corners are `(x, y)`, `(x + w - 1, y)`, `(x + w - 1, y + h - 1)` and `(x, y + h - 1)`.
    pub fn new(id: String, color: Color, x: i32, y: i32, width: i32, height: i32) -> Self {
        let right = geom::clamp_i32(x as i64 + width as i64 - 1);
        let bottom = geom::clamp_i32(y as i64 + height as i64 - 1);
        Rect(Polygon {
            id,
            color,
            points: vec![
                Point::new(x, y),
                Point::new(right, y),
                Point::new(right, bottom),
                Point::new(x, bottom),
            ],
        })
    }

    /// Returns the rectangle as a polygon.
    #[inline]
    pub fn as_polygon(&self) -> &Polygon {
        &self.0
    }
}

/// A group of shapes.
///
/// `g` element in SVG. Exclusively owns its children;
/// every transform is forwarded to all of them.
#[derive(Clone, PartialEq, Debug)]
pub struct Group {
    /// Element's ID.
    ///
    /// Can be empty.
    pub(crate) id: String,

    /// Nominal group color.
    ///
    /// Not used during rendering. Always white for parsed groups.
    pub(crate) color: Color,

    /// Children in document order.
    pub(crate) children: Vec<Shape>,
}

impl Group {
    /// Creates a new group.
    pub fn new(id: String, color: Color, children: Vec<Shape>) -> Self {
        Group {
            id,
            color,
            children,
        }
    }

    /// Returns element's ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns nominal group color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns children in document order.
    #[inline]
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    fn translate(&mut self, t: Point) {
        for child in &mut self.children {
            child.translate(t);
        }
    }

    fn scale(&mut self, origin: Point, factor: i32) {
        for child in &mut self.children {
            child.scale(origin, factor);
        }
    }

    fn rotate(&mut self, origin: Point, degrees: i32) {
        for child in &mut self.children {
            child.rotate(origin, degrees);
        }
    }

    fn bounding_box(&self) -> Option<IntRect> {
        self.children
            .iter()
            .filter_map(Shape::bounding_box)
            .reduce(|a, b| a.union(&b))
    }
}

fn translate_points(points: &mut [Point], t: Point) {
    for p in points {
        *p = p.translate(t);
    }
}

fn scale_points(points: &mut [Point], origin: Point, factor: i32) {
    for p in points {
        *p = p.scale(origin, factor);
    }
}

fn rotate_points(points: &mut [Point], origin: Point, degrees: i32) {
    for p in points {
        *p = p.rotate(origin, degrees);
    }
}
