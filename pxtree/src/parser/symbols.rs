// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

/// A location of a shape inside the scene being built.
///
/// Each index selects a child in the next nesting level, starting from the root list.
/// Holds no reference to the shape itself.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct ShapePath(Vec<usize>);

impl ShapePath {
    #[inline]
    pub fn new(indices: Vec<usize>) -> Self {
        ShapePath(indices)
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// Maps declared IDs to shape locations.
///
/// Lives for a single document conversion.
#[derive(Default, Debug)]
pub(crate) struct SymbolTable {
    entries: HashMap<String, ShapePath>,
}

impl SymbolTable {
    /// Registers a shape under `id` and `#id`.
    ///
    /// A later declaration with the same ID replaces the previous one.
    pub fn register(&mut self, id: &str, path: ShapePath) {
        if id.is_empty() {
            return;
        }

        self.register_reference(id, path.clone());
        if self.entries.insert(id.to_string(), path).is_some() {
            log::warn!("Duplicated ID '{}'. The last declaration will be used.", id);
        }
    }

    /// Registers a shape under `#id` only.
    pub fn register_reference(&mut self, id: &str, path: ShapePath) {
        if id.is_empty() {
            return;
        }

        log::debug!("Register '#{}' at {:?}.", id, path.indices());
        self.entries.insert(format!("#{}", id), path);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&ShapePath> {
        self.entries.get(key)
    }
}
