// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Resource-agnostic attribute record returned through [`ContextParser`].
//!
//! [`ContextParser`]: crate::ContextParser

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered list of named attributes extracted from collector output.
///
/// `None` marks an attribute the collector did not report. Serialises as a
/// map that preserves declaration order, with `null` for absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextAttrs {
    entries: Vec<(&'static str, Option<String>)>,
}

impl ContextAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute. Names are expected to be unique.
    pub fn push(&mut self, name: &'static str, value: Option<String>) {
        self.entries.push((name, value));
    }

    /// Returns the value of `name`, or `None` if it is absent or unknown.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns `true` if `name` is one of this record's attributes.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attributes that carry a value.
    pub fn present(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.entries.iter().map(|(n, v)| (*n, v.as_deref()))
    }
}

impl Serialize for ContextAttrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
