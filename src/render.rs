// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pxtree::{Ellipse, Group, Polygon, Polyline, Shape};

use crate::Canvas;

pub fn render_nodes(shapes: &[Shape], canvas: &mut Canvas) {
    for shape in shapes {
        render_node(shape, canvas);
    }
}

pub fn render_node(shape: &Shape, canvas: &mut Canvas) {
    match shape {
        Shape::Ellipse(ref ellipse) => render_ellipse(ellipse, canvas),
        Shape::Circle(ref circle) => render_ellipse(circle.as_ellipse(), canvas),
        Shape::Polyline(ref polyline) => render_polyline(polyline, canvas),
        Shape::Line(ref line) => render_polyline(line.as_polyline(), canvas),
        Shape::Polygon(ref polygon) => render_polygon(polygon, canvas),
        Shape::Rect(ref rect) => render_polygon(rect.as_polygon(), canvas),
        Shape::Group(ref group) => render_group(group, canvas),
    }
}

fn render_ellipse(ellipse: &Ellipse, canvas: &mut Canvas) {
    canvas.draw_ellipse(ellipse.center(), ellipse.radius(), ellipse.color());
}

fn render_polyline(polyline: &Polyline, canvas: &mut Canvas) {
    // A single point is not a segment.
    for pair in polyline.points().windows(2) {
        canvas.draw_line(pair[0], pair[1], polyline.color());
    }
}

fn render_polygon(polygon: &Polygon, canvas: &mut Canvas) {
    canvas.draw_polygon(polygon.points(), polygon.color());
}

fn render_group(group: &Group, canvas: &mut Canvas) {
    render_nodes(group.children(), canvas);
}
