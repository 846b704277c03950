// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # context-parser
//!
//! Turns the text output of monitoring collector plugins into context
//! attribute records.
//!
//! A collector plugin emits a status line plus optional performance data.
//! A [`ContextParser`] for the monitored resource type reads that output
//! and returns the resource's named attributes. Parsers are selected by
//! resource name through a [`ParserRegistry`].
//!
//! # Parsers
//!
//! | Resource | Parser | Attributes |
//! |---|---|---|
//! | `region` | [`RegionParser`] | cores, VMs, storage, RAM, users, location |
//!
//! # Permissive Parsing
//! Unknown keys, repeated keys and non-numeric values are accepted without
//! error. The only failure in the default [`ParseMode`] is a status line
//! with no data at all ([`ParseError::NoData`]).
//!
//! # Example
//! ```
//! use context_parser::{ParseMode, ParserRegistry};
//!
//! let registry = ParserRegistry::with_defaults(ParseMode::Permissive);
//! let attrs = registry
//!     .context_attrs("region", "coreUsed: 3, coreTot: 10", "")
//!     .unwrap();
//! assert_eq!(attrs.get("coreUsed"), Some("3"));
//! assert_eq!(attrs.get("ramTot"), None);
//! ```

mod attrs;
mod config;
mod error;
pub mod parser;
mod plugin;
mod registry;

pub use attrs::ContextAttrs;
pub use config::{AdapterConfig, OutputFormat};
pub use error::{ConfigError, ParseError};
pub use parser::region::{RegionAttributes, RegionField, RegionParser};
pub use parser::{ContextParser, ParseMode};
pub use plugin::PluginOutput;
pub use registry::ParserRegistry;

/// Extracts region attributes in permissive mode.
///
/// This is a convenience wrapper around [`RegionParser::extract()`].
pub fn extract_region(data: &str, perf_data: &str) -> Result<RegionAttributes, ParseError> {
    RegionParser::new().extract(data, perf_data)
}
