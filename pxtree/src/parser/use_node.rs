// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::converter::Context;
use super::svgtree::SvgNode;
use super::Error;
use crate::Shape;

/// Resolves a `use` element into an independent copy of the referenced shape.
///
/// Only shapes declared before the `use` element can be referenced.
/// The copy takes the `use` element ID.
pub(crate) fn convert(node: SvgNode, ctx: &Context) -> Result<Shape, Error> {
    let href = node.href().unwrap_or("");

    let source = ctx
        .symbols
        .get(href)
        .and_then(|path| ctx.resolve(path))
        .ok_or_else(|| Error::UnresolvedReference(href.to_string()))?;

    log::debug!("Resolved '{}' to a {} shape.", href, kind_name(source));

    let mut shape = source.duplicate();
    shape.set_id(node.element_id().to_string());
    Ok(shape)
}

fn kind_name(shape: &Shape) -> &'static str {
    match shape {
        Shape::Ellipse(_) => "ellipse",
        Shape::Circle(_) => "circle",
        Shape::Polyline(_) => "polyline",
        Shape::Line(_) => "line",
        Shape::Polygon(_) => "polygon",
        Shape::Rect(_) => "rect",
        Shape::Group(_) => "g",
    }
}
