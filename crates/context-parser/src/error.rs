// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for context attribute extraction.

/// Errors that can occur when extracting context attributes.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The first line of the collector output holds no usable segments.
    #[error("no valid data found in collector output")]
    NoData,

    /// A recognised key carried no `:` separator (strict mode only).
    #[error("attribute '{key}' has no value")]
    MissingValue { key: String },

    /// A key is not one of the region attribute names.
    #[error("unknown region attribute '{0}'")]
    UnknownField(String),

    /// No parser is registered under the requested resource name.
    #[error("no parser registered for resource '{0}'")]
    UnknownResource(String),
}

/// Errors raised while loading adapter configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The configuration is not valid TOML, or could not be serialised.
    #[error("TOML error: {0}")]
    Toml(String),

    /// A value in the configuration is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
