// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Name-keyed dispatch to [`ContextParser`] implementations.

use crate::parser::region::RegionParser;
use crate::{ContextAttrs, ContextParser, ParseError, ParseMode};
use std::collections::BTreeMap;

/// Maps resource type names to the parser for that resource.
///
/// Names are stored lowercase and looked up case-insensitively.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: BTreeMap<String, Box<dyn ContextParser>>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in parser, configured with `mode`.
    pub fn with_defaults(mode: ParseMode) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RegionParser::with_mode(mode)));
        registry
    }

    /// Registers `parser` under its own name, returning any parser it replaced.
    pub fn register(&mut self, parser: Box<dyn ContextParser>) -> Option<Box<dyn ContextParser>> {
        let name = parser.name().to_lowercase();
        let previous = self.parsers.insert(name, parser);
        if let Some(old) = &previous {
            tracing::warn!("replaced existing parser for resource '{}'", old.name());
        }
        previous
    }

    /// Looks up the parser for `resource`.
    pub fn get(&self, resource: &str) -> Result<&dyn ContextParser, ParseError> {
        self.parsers
            .get(&resource.to_lowercase())
            .map(|p| p.as_ref())
            .ok_or_else(|| ParseError::UnknownResource(resource.to_string()))
    }

    /// Registered resource names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.parsers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Parses collector output with the parser registered for `resource`.
    pub fn context_attrs(
        &self,
        resource: &str,
        data: &str,
        perf_data: &str,
    ) -> Result<ContextAttrs, ParseError> {
        let parser = self.get(resource)?;
        tracing::debug!("parsing '{}' collector output", parser.name());
        parser.context_attrs(data, perf_data)
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}
