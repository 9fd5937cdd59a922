// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::svgtree::{AId, SvgNode};
use super::Error;
use crate::Color;

/// Parses a color.
///
/// Accepts `#RRGGBB` or one of `black`, `white`, `red`, `green`, `blue` and `yellow`.
///
/// # Errors
///
/// - `Error::InvalidColor` when `#` is not followed by exactly six hex digits.
/// - `Error::UnknownColor` for any other name.
pub fn parse_color(text: &str) -> Result<Color, Error> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(text.to_string()));
        }

        let n = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(text.to_string()))?;
        Ok(Color::new_rgb((n >> 16) as u8, (n >> 8) as u8, n as u8))
    } else {
        from_name(text).ok_or_else(|| Error::UnknownColor(text.to_string()))
    }
}

fn from_name(name: &str) -> Option<Color> {
    let c = match name {
        "black" => Color::black(),
        "white" => Color::white(),
        "red" => Color::new_rgb(255, 0, 0),
        "green" => Color::new_rgb(0, 255, 0),
        "blue" => Color::new_rgb(0, 0, 255),
        "yellow" => Color::new_rgb(255, 255, 0),
        _ => return None,
    };

    Some(c)
}

/// Resolves a `fill` or `stroke` color.
///
/// A missing attribute falls back to black, just like in SVG.
pub(crate) fn resolve_color(node: SvgNode, aid: AId) -> Result<Color, Error> {
    match node.attribute::<&str>(aid) {
        Some(value) => parse_color(value),
        None => {
            log::warn!(
                "'{}' has no {} color. Black will be used.",
                node.raw_tag_name(),
                aid
            );
            Ok(Color::black())
        }
    }
}
