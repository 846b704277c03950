// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `ctx-adapter list` command: show registered parsers.

use context_parser::{AdapterConfig, ParserRegistry};

pub fn execute(config: AdapterConfig) -> anyhow::Result<()> {
    let registry = ParserRegistry::with_defaults(config.parse_mode());

    println!("  {:<12} Attributes", "Resource");
    println!("  {}", "-".repeat(60));
    for name in registry.names() {
        let parser = registry.get(name)?;
        let marker = if name == config.resource.to_lowercase() {
            "*"
        } else {
            " "
        };
        println!("{marker} {:<12} {}", name, parser.attr_names().join(", "));
    }
    Ok(())
}
