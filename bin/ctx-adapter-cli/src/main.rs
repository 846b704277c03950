// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # ctx-adapter
//!
//! Command-line interface for the context attribute parsers.
//!
//! ## Usage
//! ```bash
//! # Parse a collector status line directly
//! ctx-adapter parse --data "coreUsed: 3, coreTot: 10, location: Rome"
//!
//! # Parse raw plugin output from stdin, printing a summary
//! check_region | ctx-adapter parse --resource region --format text
//!
//! # List available parsers
//! ctx-adapter list
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ctx-adapter",
    about = "Extracts context attributes from monitoring collector output",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse collector output into context attributes.
    Parse {
        /// Resource type of the collector output (e.g., "region").
        #[arg(short, long)]
        resource: Option<String>,

        /// Status text to parse. Raw plugin output is read from stdin if omitted.
        #[arg(short, long)]
        data: Option<String>,

        /// Performance data accompanying `--data` (unused when reading stdin).
        #[arg(short, long, default_value = "")]
        perf: String,

        /// Reject recognised keys that carry no value.
        #[arg(long)]
        strict: bool,

        /// Output format: json or text.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List registered parsers and the attributes they report.
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse {
            resource,
            data,
            perf,
            strict,
            format,
        } => commands::parse::execute(config, resource, data, perf, strict, format),
        Commands::List => commands::list::execute(config),
    }
}
