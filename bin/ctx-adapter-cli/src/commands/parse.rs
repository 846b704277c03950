// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `ctx-adapter parse` command: extract context attributes and print them.

use anyhow::Context;
use context_parser::{
    AdapterConfig, ContextAttrs, ContextParser, OutputFormat, ParserRegistry, PluginOutput,
};
use std::io::Read;

pub fn execute(
    mut config: AdapterConfig,
    resource: Option<String>,
    data: Option<String>,
    perf: String,
    strict: bool,
    format: Option<String>,
) -> anyhow::Result<()> {
    if let Some(resource) = resource {
        config.resource = resource;
    }
    if let Some(format) = format {
        config.format = format;
    }
    config.strict |= strict;
    let output_format = config.output_format()?;

    let input = match data {
        Some(data) => PluginOutput {
            data,
            perf_data: perf,
        },
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read plugin output from stdin")?;
            PluginOutput::split(&raw)
        }
    };

    let registry = ParserRegistry::with_defaults(config.parse_mode());
    let parser = registry.get(&config.resource)?;
    let attrs = parser
        .context_attrs(&input.data, &input.perf_data)
        .with_context(|| format!("failed to parse '{}' output", config.resource))?;

    tracing::info!(
        "{} of {} attributes reported",
        attrs.present(),
        attrs.len()
    );

    println!("{}", render(output_format, parser, &attrs)?);
    Ok(())
}

/// Renders attributes in the requested format.
///
/// Text output uses the parser's own summary line when it has one.
fn render(
    format: OutputFormat,
    parser: &dyn ContextParser,
    attrs: &ContextAttrs,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(attrs)?),
        OutputFormat::Text => Ok(parser
            .summary(attrs)
            .unwrap_or_else(|| render_pairs(parser.name(), attrs))),
    }
}

/// Renders attributes as `resource: key=value ...`, with `-` for absent values.
fn render_pairs(resource: &str, attrs: &ContextAttrs) -> String {
    let pairs: Vec<String> = attrs
        .iter()
        .map(|(name, value)| format!("{name}={}", value.unwrap_or("-")))
        .collect();
    format!("{resource}: {}", pairs.join(" "))
}
