// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`ContextParser`] trait and per-resource parser implementations.

pub mod region;

use crate::{ContextAttrs, ParseError};

/// How malformed segments are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Unknown keys are ignored and a recognised key without `:` gets an
    /// empty value.
    #[default]
    Permissive,
    /// As permissive, except a recognised key without `:` is an error.
    Strict,
}

/// Trait for context attribute parsers.
///
/// One implementation exists per monitored resource type. Each takes the
/// status text and performance data emitted by a collector plugin and
/// produces the resource's context attributes.
///
/// Parsers are pure string processing with no I/O, so a single instance
/// may be shared freely across threads.
pub trait ContextParser: Send + Sync {
    /// Resource type name this parser is registered under.
    fn name(&self) -> &str;

    /// Names of every attribute this parser reports, in output order.
    fn attr_names(&self) -> &'static [&'static str];

    /// Parses collector output into context attributes.
    fn context_attrs(&self, data: &str, perf_data: &str) -> Result<ContextAttrs, ParseError>;

    /// One-line human-readable rendering of `attrs`, if this parser has one.
    fn summary(&self, _attrs: &ContextAttrs) -> Option<String> {
        None
    }
}

/// A `key:value` segment of a collector line, whitespace already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment {
    pub key: String,
    /// `None` when the segment had no `:` separator.
    pub value: Option<String>,
}

/// Returns the first line of `data`; later lines are never significant.
pub(crate) fn first_line(data: &str) -> &str {
    data.split('\n').next().unwrap_or_default()
}

/// Removes every whitespace character, interior ones included.
///
/// U+FEFF (byte order mark) counts as whitespace here.
pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{FEFF}')
        .collect()
}

/// Splits a line into its comma-separated segments, dropping blank ones.
///
/// Each segment is split on its first `:`; anything after that, further
/// colons included, is the value.
pub(crate) fn split_segments(line: &str) -> Vec<Segment> {
    line.split(',')
        .filter(|raw| !strip_whitespace(raw).is_empty())
        .map(|raw| match raw.split_once(':') {
            Some((key, value)) => Segment {
                key: strip_whitespace(key),
                value: Some(strip_whitespace(value)),
            },
            None => Segment {
                key: strip_whitespace(raw),
                value: None,
            },
        })
        .collect()
}
