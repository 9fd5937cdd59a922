// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`pxtree` turns a small subset of [SVG] into an integer scene graph.

Supported elements are `ellipse`, `circle`, `line`, `polyline`, `polygon`, `rect`,
`g` and `use`. Each element can have a single `translate`, `scale` or `rotate`
transform, applied directly to its integer geometry.

`use` elements are resolved into independent copies of previously declared
shapes, so the produced tree never shares a shape between two places.

## Limitations

- Integer geometry only. Fractional values are truncated
- Colors are limited to `#RRGGBB` and six named colors
- No strokes width, opacity, paths, units or `viewBox`
- Forward references in `use` are errors

[SVG]: https://en.wikipedia.org/wiki/Scalable_Vector_Graphics
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::uninlined_format_args)]

mod parser;
mod tree;

pub use parser::{parse_color, Error};
pub use roxmltree;
pub use tree::*;
