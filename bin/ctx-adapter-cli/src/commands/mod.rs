// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI setup.

pub mod list;
pub mod parse;

use anyhow::Context;
use context_parser::AdapterConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `-v` count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the config file if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AdapterConfig> {
    match path {
        Some(path) => {
            let config = AdapterConfig::from_file(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?;
            tracing::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(AdapterConfig::default()),
    }
}
