// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

use crate::Point;

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Supported element names.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EId {
    Circle,
    Ellipse,
    G,
    Line,
    Polygon,
    Polyline,
    Rect,
    Svg,
    Use,
}

impl EId {
    pub fn from_str(text: &str) -> Option<Self> {
        Some(match text {
            "circle" => EId::Circle,
            "ellipse" => EId::Ellipse,
            "g" => EId::G,
            "line" => EId::Line,
            "polygon" => EId::Polygon,
            "polyline" => EId::Polyline,
            "rect" => EId::Rect,
            "svg" => EId::Svg,
            "use" => EId::Use,
            _ => return None,
        })
    }
}

/// Supported attribute names.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AId {
    Cx,
    Cy,
    Fill,
    Height,
    Href,
    Id,
    Points,
    R,
    Rx,
    Ry,
    Stroke,
    Transform,
    TransformOrigin,
    Width,
    X,
    X1,
    X2,
    Y,
    Y1,
    Y2,
}

impl AId {
    pub fn to_str(self) -> &'static str {
        match self {
            AId::Cx => "cx",
            AId::Cy => "cy",
            AId::Fill => "fill",
            AId::Height => "height",
            AId::Href => "href",
            AId::Id => "id",
            AId::Points => "points",
            AId::R => "r",
            AId::Rx => "rx",
            AId::Ry => "ry",
            AId::Stroke => "stroke",
            AId::Transform => "transform",
            AId::TransformOrigin => "transform-origin",
            AId::Width => "width",
            AId::X => "x",
            AId::X1 => "x1",
            AId::X2 => "x2",
            AId::Y => "y",
            AId::Y1 => "y1",
            AId::Y2 => "y2",
        }
    }
}

impl fmt::Display for AId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// A read-only view of an XML element.
///
/// Only element children are visible. Text and comments are skipped.
#[derive(Clone, Copy, Debug)]
pub struct SvgNode<'a, 'input: 'a>(roxmltree::Node<'a, 'input>);

impl<'a, 'input: 'a> SvgNode<'a, 'input> {
    #[inline]
    pub fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        SvgNode(node)
    }

    /// Returns element's tag name, unless it's not supported.
    #[inline]
    pub fn tag_name(&self) -> Option<EId> {
        // Elements in foreign namespaces are not SVG shapes.
        match self.0.tag_name().namespace() {
            None | Some("http://www.w3.org/2000/svg") => EId::from_str(self.0.tag_name().name()),
            Some(_) => None,
        }
    }

    /// Returns element's tag name as written in the document.
    #[inline]
    pub fn raw_tag_name(&self) -> &'a str {
        self.0.tag_name().name()
    }

    /// Returns element's `id` attribute value.
    ///
    /// Returns an empty string otherwise.
    #[inline]
    pub fn element_id(&self) -> &'a str {
        self.attribute(AId::Id).unwrap_or("")
    }

    /// Returns a reference target from `href` or `xlink:href`.
    pub fn href(&self) -> Option<&'a str> {
        self.0
            .attribute(AId::Href.to_str())
            .or_else(|| self.0.attribute((XLINK_NS, AId::Href.to_str())))
    }

    /// Returns an attribute value.
    pub fn attribute<T: FromValue<'a>>(&self, aid: AId) -> Option<T> {
        let value = self.0.attribute(aid.to_str())?;
        match T::parse(aid, value) {
            Some(v) => Some(v),
            None => {
                log::warn!("Failed to parse {} value: '{}'.", aid, value);
                None
            }
        }
    }

    /// Returns an integer attribute value.
    ///
    /// Fractional values are truncated. Missing or malformed values are 0.
    #[inline]
    pub fn int_attribute(&self, aid: AId) -> i32 {
        self.attribute::<f64>(aid).map(|n| n as i32).unwrap_or(0)
    }

    /// Returns an iterator over child elements in document order.
    #[inline]
    pub fn children(&self) -> impl Iterator<Item = SvgNode<'a, 'input>> {
        self.0.children().filter(|n| n.is_element()).map(SvgNode)
    }
}

/// A trait for parsing attribute values.
pub trait FromValue<'a>: Sized {
    /// Parses an attribute value.
    ///
    /// When `None` is returned, the attribute value will be logged as a parsing failure.
    fn parse(aid: AId, value: &'a str) -> Option<Self>;
}

impl<'a> FromValue<'a> for &'a str {
    fn parse(_: AId, value: &'a str) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromValue<'a> for f64 {
    fn parse(_: AId, value: &str) -> Option<Self> {
        svgtypes::Number::from_str(value).ok().map(|v| v.0)
    }
}

impl<'a> FromValue<'a> for Vec<Point> {
    fn parse(_: AId, value: &str) -> Option<Self> {
        let points = svgtypes::PointsParser::from(value)
            .map(|(x, y)| Point::new(x as i32, y as i32))
            .collect();
        Some(points)
    }
}

/// `transform-origin` as a pair of integers.
///
/// Missing values are 0.
impl<'a> FromValue<'a> for Point {
    fn parse(_: AId, value: &str) -> Option<Self> {
        let mut numbers = svgtypes::NumberListParser::from(value);
        let x = numbers.next().transpose().ok()?.unwrap_or(0.0);
        let y = numbers.next().transpose().ok()?.unwrap_or(0.0);
        Some(Point::new(x as i32, y as i32))
    }
}
