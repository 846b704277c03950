// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Splitting of raw monitoring-plugin output into status text and
//! performance data.
//!
//! Plugins follow the conventional layout:
//!
//! ```text
//! TEXT OUTPUT | OPTIONAL PERFDATA
//! LONG TEXT LINE 1
//! LONG TEXT LINE N | PERFDATA LINE 2
//! PERFDATA LINE 3
//! ```
//!
//! Performance data may follow a `|` on the first line, and a `|` on any
//! later line switches every remaining line to performance data.

/// Raw plugin output separated into the two inputs of a [`ContextParser`].
///
/// [`ContextParser`]: crate::ContextParser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginOutput {
    /// Status text lines, newline-joined.
    pub data: String,
    /// Performance data segments, newline-joined.
    pub perf_data: String,
}

impl PluginOutput {
    /// Splits raw plugin output. Never fails; empty input yields empty parts.
    pub fn split(raw: &str) -> Self {
        let mut data = Vec::new();
        let mut perf = Vec::new();
        let mut in_long_perf = false;

        for (i, line) in raw.lines().enumerate() {
            if in_long_perf {
                perf.push(line.trim());
                continue;
            }
            match line.split_once('|') {
                Some((text, rest)) => {
                    data.push(text.trim());
                    perf.push(rest.trim());
                    // Only a `|` after the first line starts the long perf block.
                    in_long_perf = i > 0;
                }
                None => data.push(line.trim()),
            }
        }

        perf.retain(|p| !p.is_empty());
        Self {
            data: data.join("\n"),
            perf_data: perf.join("\n"),
        }
    }
}
