// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::style::resolve_color;
use super::svgtree::{AId, SvgNode};
use super::Error;
use crate::{Circle, Ellipse, Line, Point, Polygon, Polyline, Rect, Shape};

pub(crate) fn convert_ellipse(node: SvgNode) -> Result<Shape, Error> {
    let cx = node.int_attribute(AId::Cx);
    let cy = node.int_attribute(AId::Cy);
    let rx = node.int_attribute(AId::Rx);
    let ry = node.int_attribute(AId::Ry);
    let color = resolve_color(node, AId::Fill)?;

    Ok(Shape::Ellipse(Ellipse {
        id: node.element_id().to_string(),
        color,
        center: Point::new(cx, cy),
        radius: Point::new(rx, ry),
    }))
}

pub(crate) fn convert_circle(node: SvgNode) -> Result<Shape, Error> {
    let cx = node.int_attribute(AId::Cx);
    let cy = node.int_attribute(AId::Cy);
    let r = node.int_attribute(AId::R);
    let color = resolve_color(node, AId::Fill)?;

    Ok(Shape::Circle(Circle::new(
        node.element_id().to_string(),
        color,
        Point::new(cx, cy),
        r,
    )))
}

pub(crate) fn convert_line(node: SvgNode) -> Result<Shape, Error> {
    let x1 = node.int_attribute(AId::X1);
    let y1 = node.int_attribute(AId::Y1);
    let x2 = node.int_attribute(AId::X2);
    let y2 = node.int_attribute(AId::Y2);
    let color = resolve_color(node, AId::Stroke)?;

    Ok(Shape::Line(Line::new(
        node.element_id().to_string(),
        color,
        Point::new(x1, y1),
        Point::new(x2, y2),
    )))
}

pub(crate) fn convert_polyline(node: SvgNode) -> Result<Shape, Error> {
    let color = resolve_color(node, AId::Stroke)?;
    let points = points_to_vec(node);
    if points.len() < 2 {
        log::warn!("Polyline '{}' has less than 2 points.", node.element_id());
    }

    Ok(Shape::Polyline(Polyline {
        id: node.element_id().to_string(),
        color,
        points,
    }))
}

pub(crate) fn convert_polygon(node: SvgNode) -> Result<Shape, Error> {
    let color = resolve_color(node, AId::Fill)?;
    let points = points_to_vec(node);

    Ok(Shape::Polygon(Polygon {
        id: node.element_id().to_string(),
        color,
        points,
    }))
}

pub(crate) fn convert_rect(node: SvgNode) -> Result<Shape, Error> {
    let x = node.int_attribute(AId::X);
    let y = node.int_attribute(AId::Y);
    let width = node.int_attribute(AId::Width);
    let height = node.int_attribute(AId::Height);
    let color = resolve_color(node, AId::Fill)?;

    if width <= 0 || height <= 0 {
        log::warn!("Rect '{}' has an invalid size.", node.element_id());
    }

    Ok(Shape::Rect(Rect::new(
        node.element_id().to_string(),
        color,
        x,
        y,
        width,
        height,
    )))
}

fn points_to_vec(node: SvgNode) -> Vec<Point> {
    node.attribute(AId::Points).unwrap_or_default()
}
