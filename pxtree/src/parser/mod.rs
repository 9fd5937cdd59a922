// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod converter;
mod shapes;
mod style;
mod svgtree;
mod symbols;
mod use_node;

pub use style::parse_color;

use crate::Tree;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Failed to parse an SVG data.
    ParsingFailed(roxmltree::Error),

    /// SVG doesn't have a valid size.
    ///
    /// Occurs when width and/or height are <= 0 or not set.
    InvalidSize,

    /// A color name is not in the named colors table.
    UnknownColor(String),

    /// A `#` color is not followed by exactly six hex digits.
    InvalidColor(String),

    /// A `use` element references an ID that was not declared before it.
    UnresolvedReference(String),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
            Error::InvalidSize => {
                write!(f, "SVG has an invalid size")
            }
            Error::UnknownColor(ref name) => {
                write!(f, "unknown color '{}'", name)
            }
            Error::InvalidColor(ref text) => {
                write!(f, "invalid color '{}'", text)
            }
            Error::UnresolvedReference(ref href) => {
                write!(f, "'{}' does not reference a previously declared element", href)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Tree {
    /// Parses `Tree` from an SVG data.
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;
        Self::from_str(text)
    }

    /// Parses `Tree` from an SVG string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, Error> {
        let xml_opt = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };

        let doc =
            roxmltree::Document::parse_with_options(text, xml_opt).map_err(Error::ParsingFailed)?;

        Self::from_xmltree(&doc)
    }

    /// Parses `Tree` from `roxmltree::Document`.
    pub fn from_xmltree(doc: &roxmltree::Document) -> Result<Self, Error> {
        converter::convert_doc(doc)
    }
}
