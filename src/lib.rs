// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`pxsvg` is a tiny SVG to PNG renderer.

The SVG is parsed into a [`pxtree::Tree`] and then drawn onto a [`Canvas`]
shape by shape, without anti-aliasing, using integer coordinates only.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

pub use pxtree;
pub use tiny_skia;

mod canvas;
mod render;

pub use canvas::Canvas;

use pxtree::Color;

/// Rendering options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Canvas color before any shape is drawn.
    ///
    /// Default: white
    pub background: Color,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            background: Color::white(),
        }
    }
}

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// SVG loading failed.
    Tree(pxtree::Error),

    /// Failed to read an input file.
    Io(std::io::Error),

    /// Failed to write a PNG.
    Encoding(png::EncodingError),

    /// A canvas of the SVG size cannot be allocated.
    InvalidCanvasSize,
}

impl From<pxtree::Error> for Error {
    fn from(e: pxtree::Error) -> Self {
        Error::Tree(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<png::EncodingError> for Error {
    fn from(e: png::EncodingError) -> Self {
        Error::Encoding(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::Tree(ref e) => {
                write!(f, "{}", e)
            }
            Error::Io(ref e) => {
                write!(f, "failed to read the file cause {}", e)
            }
            Error::Encoding(ref e) => {
                write!(f, "failed to write a PNG cause {}", e)
            }
            Error::InvalidCanvasSize => {
                write!(f, "failed to allocate a canvas")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Renders a tree onto the canvas.
///
/// Shapes are drawn in document order, so later shapes paint over earlier ones.
/// The canvas is not cleared beforehand.
pub fn render(tree: &pxtree::Tree, canvas: &mut Canvas) {
    render::render_nodes(&tree.root, canvas);
}

/// Renders a single shape onto the canvas.
pub fn render_node(shape: &pxtree::Shape, canvas: &mut Canvas) {
    render::render_node(shape, canvas);
}

/// Creates a canvas of the tree size, fills it with the background and renders the tree.
pub fn rasterize(tree: &pxtree::Tree, opt: &Options) -> Result<Canvas, Error> {
    let (width, height) = tree.size.dimensions();
    let mut canvas = Canvas::new(width, height).ok_or(Error::InvalidCanvasSize)?;
    canvas.fill(opt.background);
    render(tree, &mut canvas);
    Ok(canvas)
}

/// Converts an SVG file into a PNG file.
///
/// Nothing is written when the SVG cannot be loaded.
pub fn svg_to_png<P, Q>(svg_path: P, png_path: Q, opt: &Options) -> Result<(), Error>
where
    P: AsRef<std::path::Path>,
    Q: AsRef<std::path::Path>,
{
    let data = std::fs::read(svg_path)?;
    let tree = pxtree::Tree::from_data(&data)?;
    let canvas = rasterize(&tree, opt)?;
    log::debug!(
        "Rendered {} shape(s) onto a {}x{} canvas.",
        tree.root.len(),
        canvas.width(),
        canvas.height()
    );

    canvas.save_png(png_path)?;
    Ok(())
}
