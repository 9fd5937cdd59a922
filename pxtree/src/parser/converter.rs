// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::TransformListToken;

use super::svgtree::{AId, EId, SvgNode};
use super::symbols::{ShapePath, SymbolTable};
use super::{shapes, use_node, Error};
use crate::{Color, Group, IntSize, Point, Shape, Tree};

/// Conversion state.
///
/// Created for a single document and dropped once the tree is built.
pub(crate) struct Context {
    pub(crate) symbols: SymbolTable,
    /// Shape lists under construction.
    ///
    /// The first one is the root list, the last one belongs to the innermost open group.
    levels: Vec<Vec<Shape>>,
}

impl Context {
    fn new() -> Self {
        Context {
            symbols: SymbolTable::default(),
            levels: vec![Vec::new()],
        }
    }

    /// Returns the location the next appended shape will have.
    ///
    /// An open group will be appended at the current end of its parent list,
    /// so each level length is also the index of the group below it.
    fn next_path(&self) -> ShapePath {
        ShapePath::new(self.levels.iter().map(Vec::len).collect())
    }

    fn append(&mut self, shape: Shape, registration: Registration) {
        let id = shape.id().to_string();
        let path = self.next_path();
        match registration {
            Registration::Declaration => self.symbols.register(&id, path),
            Registration::Reference => self.symbols.register_reference(&id, path),
        }

        // Unwrap is safe, because the root level is never removed.
        self.levels.last_mut().unwrap().push(shape);
    }

    fn open_group(&mut self) {
        self.levels.push(Vec::new());
    }

    fn close_group(&mut self) -> Vec<Shape> {
        debug_assert!(self.levels.len() > 1);
        self.levels.pop().unwrap_or_default()
    }

    /// Returns a shape by its location.
    ///
    /// The location may point inside groups that are still being built.
    pub(crate) fn resolve(&self, path: &ShapePath) -> Option<&Shape> {
        let mut indices = path.indices();
        for level in &self.levels {
            let (idx, rest) = indices.split_first()?;
            if let Some(shape) = level.get(*idx) {
                return shape.descendant(rest);
            }

            // Only the open group at the end of this level can be referenced.
            if *idx != level.len() {
                return None;
            }

            indices = rest;
        }

        None
    }

    fn finish(mut self) -> Vec<Shape> {
        debug_assert_eq!(self.levels.len(), 1);
        self.levels.swap_remove(0)
    }
}

/// How a converted shape is made referenceable.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Registration {
    /// By `id` and `#id`.
    Declaration,
    /// By `#id` only. Used for `use` results.
    Reference,
}

/// Converts an input `Document` into a `Tree`.
///
/// # Errors
///
/// - If the root element doesn't have a valid size - returns `Error::InvalidSize`.
/// - Any color or reference error aborts the whole conversion.
pub(crate) fn convert_doc(doc: &roxmltree::Document) -> Result<Tree, Error> {
    let svg = SvgNode::new(doc.root_element());
    if svg.tag_name() != Some(EId::Svg) {
        log::warn!("Root element is '{}' and not 'svg'.", svg.raw_tag_name());
    }

    let width = svg.int_attribute(AId::Width);
    let height = svg.int_attribute(AId::Height);
    let size = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => IntSize::from_wh(w, h),
        _ => None,
    };
    let size = size.ok_or(Error::InvalidSize)?;

    let mut ctx = Context::new();
    convert_children(svg, &mut ctx)?;

    Ok(Tree {
        size,
        root: ctx.finish(),
    })
}

fn convert_children(parent: SvgNode, ctx: &mut Context) -> Result<(), Error> {
    for node in parent.children() {
        let mut registration = Registration::Declaration;
        let mut shape = match node.tag_name() {
            Some(EId::Ellipse) => shapes::convert_ellipse(node)?,
            Some(EId::Circle) => shapes::convert_circle(node)?,
            Some(EId::Line) => shapes::convert_line(node)?,
            Some(EId::Polygon) => shapes::convert_polygon(node)?,
            Some(EId::Polyline) => shapes::convert_polyline(node)?,
            Some(EId::Rect) => shapes::convert_rect(node)?,
            Some(EId::G) => convert_group(node, ctx)?,
            Some(EId::Use) => {
                registration = Registration::Reference;
                use_node::convert(node, ctx)?
            }
            Some(EId::Svg) | None => {
                log::warn!("Unrecognized shape type: {}.", node.raw_tag_name());
                continue;
            }
        };

        apply_transform(node, &mut shape);
        ctx.append(shape, registration);
    }

    Ok(())
}

fn convert_group(node: SvgNode, ctx: &mut Context) -> Result<Shape, Error> {
    ctx.open_group();
    let res = convert_children(node, ctx);
    let children = ctx.close_group();
    res?;

    Ok(Shape::Group(Group {
        id: node.element_id().to_string(),
        color: Color::white(),
        children,
    }))
}

/// Applies the `transform` attribute to a converted shape.
///
/// Only a single `translate`, `scale` or `rotate` is supported.
/// Everything else is logged and ignored.
fn apply_transform(node: SvgNode, shape: &mut Shape) {
    let text: &str = match node.attribute(AId::Transform) {
        Some(v) => v,
        None => return,
    };

    let origin: Point = node.attribute(AId::TransformOrigin).unwrap_or_default();

    let mut tokens = Vec::new();
    let mut is_truncated = false;
    for token in svgtypes::TransformListParser::from(text) {
        match token {
            Ok(v) => tokens.push(v),
            Err(_) => {
                is_truncated = true;
                break;
            }
        }
    }

    if tokens.is_empty() && is_truncated {
        log::warn!("Unrecognised transform type: '{}'.", text);
        return;
    }

    let is_rotate = text.trim_start().starts_with("rotate");
    let (transform, rest) = match tokens.as_slice() {
        // `rotate(a cx cy)` is split by the parser into
        // `translate(cx cy) rotate(a) translate(-cx -cy)`.
        [
            TransformListToken::Translate { tx, ty },
            TransformListToken::Rotate { angle },
            TransformListToken::Translate { .. },
            rest @ ..,
        ] if is_rotate => {
            let center = Point::new(*tx as i32, *ty as i32);
            shape.rotate(center, *angle as i32);
            (None, rest)
        }
        [first, rest @ ..] => (Some(*first), rest),
        [] => return,
    };

    match transform {
        Some(TransformListToken::Translate { tx, ty }) => {
            shape.translate(Point::new(tx as i32, ty as i32));
        }
        Some(TransformListToken::Scale { sx, sy }) => {
            if sx != sy {
                log::warn!("Non-uniform scale is not supported. Only {} will be used.", sx);
            }

            shape.scale(origin, sx as i32);
        }
        Some(TransformListToken::Rotate { angle }) => {
            shape.rotate(origin, angle as i32);
        }
        Some(_) => {
            log::warn!("Unrecognised transform type: '{}'.", text);
        }
        None => {}
    }

    if !rest.is_empty() || is_truncated {
        log::warn!("Only the first transform from '{}' will be applied.", text);
    }
}
