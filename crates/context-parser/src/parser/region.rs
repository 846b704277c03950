// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Region parser for the infrastructure data collector.
//!
//! The collector reports a region's resource usage as a single line of
//! comma-separated `key:value` pairs:
//!
//! ```text
//! coreUsed: 3, coreTot:10, vmUsed:2, vmTot:5, hdUsed:100, hdTot:500,
//! ramUsed:4, ramTot:16, nUser:7, location:Rome, latitude:41.9, longitude:12.5
//! ```
//!
//! Only the first line of the status text is read and the performance data
//! is ignored. Values are kept as the raw strings the collector sent; any
//! numeric conversion is left to the consumer.

use crate::parser::{first_line, split_segments, ContextParser, ParseMode};
use crate::{ContextAttrs, ParseError};

/// A region attribute reported by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionField {
    CoreUsed,
    CoreTot,
    VmUsed,
    VmTot,
    HdUsed,
    HdTot,
    RamUsed,
    RamTot,
    NUser,
    Location,
    Latitude,
    Longitude,
}

impl RegionField {
    /// All fields in output order.
    pub const ALL: [RegionField; 12] = [
        Self::CoreUsed,
        Self::CoreTot,
        Self::VmUsed,
        Self::VmTot,
        Self::HdUsed,
        Self::HdTot,
        Self::RamUsed,
        Self::RamTot,
        Self::NUser,
        Self::Location,
        Self::Latitude,
        Self::Longitude,
    ];

    /// Wire names of [`Self::ALL`], in the same order.
    pub const NAMES: [&'static str; 12] = [
        "coreUsed",
        "coreTot",
        "vmUsed",
        "vmTot",
        "hdUsed",
        "hdTot",
        "ramUsed",
        "ramTot",
        "nUser",
        "location",
        "latitude",
        "longitude",
    ];

    /// The key used for this field in collector output.
    pub fn as_str(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// Looks up a field by its exact, case-sensitive key.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl std::str::FromStr for RegionField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .position(|n| *n == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for RegionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context attributes of an infrastructure region.
///
/// Every field is always present; `None` means the collector did not
/// report it. A recognised key sent without a value is `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionAttributes {
    /// CPU cores in use.
    pub core_used: Option<String>,
    /// Total CPU cores.
    pub core_tot: Option<String>,
    /// Active virtual machines.
    pub vm_used: Option<String>,
    /// Total virtual machines.
    pub vm_tot: Option<String>,
    /// Storage in use.
    pub hd_used: Option<String>,
    /// Total storage.
    pub hd_tot: Option<String>,
    /// Memory in use.
    pub ram_used: Option<String>,
    /// Total memory.
    pub ram_tot: Option<String>,
    /// Number of users.
    pub n_user: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl RegionAttributes {
    fn slot(&mut self, field: RegionField) -> &mut Option<String> {
        match field {
            RegionField::CoreUsed => &mut self.core_used,
            RegionField::CoreTot => &mut self.core_tot,
            RegionField::VmUsed => &mut self.vm_used,
            RegionField::VmTot => &mut self.vm_tot,
            RegionField::HdUsed => &mut self.hd_used,
            RegionField::HdTot => &mut self.hd_tot,
            RegionField::RamUsed => &mut self.ram_used,
            RegionField::RamTot => &mut self.ram_tot,
            RegionField::NUser => &mut self.n_user,
            RegionField::Location => &mut self.location,
            RegionField::Latitude => &mut self.latitude,
            RegionField::Longitude => &mut self.longitude,
        }
    }

    /// Returns the raw value of `field`, if reported.
    pub fn get(&self, field: RegionField) -> Option<&str> {
        let value = match field {
            RegionField::CoreUsed => &self.core_used,
            RegionField::CoreTot => &self.core_tot,
            RegionField::VmUsed => &self.vm_used,
            RegionField::VmTot => &self.vm_tot,
            RegionField::HdUsed => &self.hd_used,
            RegionField::HdTot => &self.hd_tot,
            RegionField::RamUsed => &self.ram_used,
            RegionField::RamTot => &self.ram_tot,
            RegionField::NUser => &self.n_user,
            RegionField::Location => &self.location,
            RegionField::Latitude => &self.latitude,
            RegionField::Longitude => &self.longitude,
        };
        value.as_deref()
    }

    /// Sets `field`, replacing any earlier value.
    pub fn set(&mut self, field: RegionField, value: impl Into<String>) {
        *self.slot(field) = Some(value.into());
    }

    /// Returns `true` if no field was reported.
    pub fn is_empty(&self) -> bool {
        RegionField::ALL.into_iter().all(|f| self.get(f).is_none())
    }

    /// Iterates over all fields in output order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionField, Option<&str>)> + '_ {
        RegionField::ALL
            .into_iter()
            .map(move |f| (f, self.get(f)))
    }

    /// Returns a one-line summary suitable for logging or CLI display.
    ///
    /// # Example output
    /// ```text
    /// Region Rome (41.9, 12.5): cores 3/10, VMs 2/5, disk 100/500, RAM 4/16, users 7
    /// ```
    pub fn summary(&self) -> String {
        render_summary(|f| self.get(f))
    }
}

/// Formats the region summary line, with `?` for unreported fields.
fn render_summary<'a>(get: impl Fn(RegionField) -> Option<&'a str>) -> String {
    let v = |f| get(f).unwrap_or("?");
    format!(
        "Region {} ({}, {}): cores {}/{}, VMs {}/{}, disk {}/{}, RAM {}/{}, users {}",
        v(RegionField::Location),
        v(RegionField::Latitude),
        v(RegionField::Longitude),
        v(RegionField::CoreUsed),
        v(RegionField::CoreTot),
        v(RegionField::VmUsed),
        v(RegionField::VmTot),
        v(RegionField::HdUsed),
        v(RegionField::HdTot),
        v(RegionField::RamUsed),
        v(RegionField::RamTot),
        v(RegionField::NUser),
    )
}

impl From<RegionAttributes> for ContextAttrs {
    fn from(mut region: RegionAttributes) -> Self {
        let mut attrs = ContextAttrs::new();
        for field in RegionField::ALL {
            attrs.push(field.as_str(), region.slot(field).take());
        }
        attrs
    }
}

/// Parses region status lines from the data collector.
#[derive(Debug, Clone, Default)]
pub struct RegionParser {
    mode: ParseMode,
}

impl RegionParser {
    /// Creates a permissive parser.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Extracts region attributes from the first line of `data`.
    ///
    /// `perf_data` is accepted for symmetry with other parsers and never
    /// read. Unknown keys are skipped and the last occurrence of a repeated
    /// key wins. The value is everything after the first `:`, so
    /// `latitude:41:54` yields `41:54`; adapters that split on every colon
    /// and keep the second piece would report `41` instead.
    ///
    /// # Errors
    /// - [`ParseError::NoData`] if the first line has no non-blank segment.
    /// - [`ParseError::MissingValue`] in strict mode, for a recognised key
    ///   without a `:` separator.
    pub fn extract(&self, data: &str, _perf_data: &str) -> Result<RegionAttributes, ParseError> {
        let segments = split_segments(first_line(data));
        if segments.is_empty() {
            return Err(ParseError::NoData);
        }

        let mut attrs = RegionAttributes::default();
        for segment in segments {
            let Some(field) = RegionField::from_name(&segment.key) else {
                tracing::trace!(key = %segment.key, "ignoring unknown region attribute");
                continue;
            };
            let value = match (segment.value, self.mode) {
                (Some(value), _) => value,
                (None, ParseMode::Strict) => {
                    return Err(ParseError::MissingValue { key: segment.key })
                }
                (None, ParseMode::Permissive) => String::new(),
            };
            attrs.set(field, value);
        }

        tracing::debug!(mode = ?self.mode, attrs = ?attrs, "extracted region attributes");
        Ok(attrs)
    }
}

impl ContextParser for RegionParser {
    fn name(&self) -> &str {
        "region"
    }

    fn attr_names(&self) -> &'static [&'static str] {
        &RegionField::NAMES
    }

    fn context_attrs(&self, data: &str, perf_data: &str) -> Result<ContextAttrs, ParseError> {
        self.extract(data, perf_data).map(ContextAttrs::from)
    }

    fn summary(&self, attrs: &ContextAttrs) -> Option<String> {
        Some(render_summary(|f| attrs.get(f.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_LINE: &str = "coreUsed: 3, coreTot:10, vmUsed:2,vmTot:5,hdUsed:100,hdTot:500,\
ramUsed:4,ramTot:16,nUser:7,location:Rome,latitude:41.9,longitude:12.5";

    #[test]
    fn test_field_names_round_trip() {
        for field in RegionField::ALL {
            assert_eq!(RegionField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(RegionField::from_name("coreused"), None);
        assert_eq!(RegionField::from_name(""), None);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("coreUsed".parse::<RegionField>().unwrap(), RegionField::CoreUsed);
        assert_eq!("nUser".parse::<RegionField>().unwrap(), RegionField::NUser);
        match "coreused".parse::<RegionField>() {
            Err(ParseError::UnknownField(name)) => assert_eq!(name, "coreused"),
            other => panic!("expected UnknownField, got {other:?}"),
        }
        assert!(" coreUsed".parse::<RegionField>().is_err());
    }

    #[test]
    fn test_extract_full_line() {
        let attrs = RegionParser::new().extract(FULL_LINE, "").unwrap();
        assert_eq!(attrs.core_used.as_deref(), Some("3"));
        assert_eq!(attrs.core_tot.as_deref(), Some("10"));
        assert_eq!(attrs.vm_used.as_deref(), Some("2"));
        assert_eq!(attrs.vm_tot.as_deref(), Some("5"));
        assert_eq!(attrs.hd_used.as_deref(), Some("100"));
        assert_eq!(attrs.hd_tot.as_deref(), Some("500"));
        assert_eq!(attrs.ram_used.as_deref(), Some("4"));
        assert_eq!(attrs.ram_tot.as_deref(), Some("16"));
        assert_eq!(attrs.n_user.as_deref(), Some("7"));
        assert_eq!(attrs.location.as_deref(), Some("Rome"));
        assert_eq!(attrs.latitude.as_deref(), Some("41.9"));
        assert_eq!(attrs.longitude.as_deref(), Some("12.5"));
    }

    #[test]
    fn test_extract_partial_leaves_rest_absent() {
        let attrs = RegionParser::new().extract("nUser: 12", "").unwrap();
        for (field, value) in attrs.iter() {
            if field == RegionField::NUser {
                assert_eq!(value, Some("12"));
            } else {
                assert_eq!(value, None, "{field} should be absent");
            }
        }
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let attrs = RegionParser::new().extract("foo:bar", "").unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let attrs = RegionParser::new().extract("CoreUsed:3,coreused:4", "").unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_empty_input_is_no_data() {
        let result = RegionParser::new().extract("", "");
        assert!(matches!(result, Err(ParseError::NoData)));
    }

    #[test]
    fn test_blank_segments_are_no_data() {
        let result = RegionParser::new().extract(" , ,\nvmTot:5", "");
        assert!(matches!(result, Err(ParseError::NoData)));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let attrs = RegionParser::new()
            .extract("vmUsed:1,vmUsed:2,vmUsed:3", "")
            .unwrap();
        assert_eq!(attrs.vm_used.as_deref(), Some("3"));
    }

    #[test]
    fn test_interior_whitespace_stripped() {
        let attrs = RegionParser::new()
            .extract("location : New York , n User : 4", "")
            .unwrap();
        assert_eq!(attrs.location.as_deref(), Some("NewYork"));
        assert_eq!(attrs.n_user.as_deref(), Some("4"));
    }

    #[test]
    fn test_missing_colon_permissive() {
        let attrs = RegionParser::new().extract("ramTot,ramUsed:4", "").unwrap();
        assert_eq!(attrs.ram_tot.as_deref(), Some(""));
        assert_eq!(attrs.ram_used.as_deref(), Some("4"));
    }

    #[test]
    fn test_missing_colon_strict() {
        let parser = RegionParser::with_mode(ParseMode::Strict);
        let result = parser.extract("ramUsed:4,ramTot", "");
        match result {
            Err(ParseError::MissingValue { key }) => assert_eq!(key, "ramTot"),
            other => panic!("expected MissingValue, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_still_ignores_unknown_keys() {
        let parser = RegionParser::with_mode(ParseMode::Strict);
        let attrs = parser.extract("whatever,coreTot:8", "").unwrap();
        assert_eq!(attrs.core_tot.as_deref(), Some("8"));
    }

    #[test]
    fn test_summary() {
        let attrs = RegionParser::new().extract(FULL_LINE, "").unwrap();
        assert_eq!(
            attrs.summary(),
            "Region Rome (41.9, 12.5): cores 3/10, VMs 2/5, disk 100/500, RAM 4/16, users 7"
        );
        assert!(RegionAttributes::default().summary().contains("cores ?/?"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let attrs = RegionParser::new().extract("latitude:41:54", "").unwrap();
        assert_eq!(attrs.latitude.as_deref(), Some("41:54"));
    }

    #[test]
    fn test_leading_bom_is_stripped() {
        let attrs = RegionParser::new().extract("\u{FEFF}coreUsed:3", "").unwrap();
        assert_eq!(attrs.core_used.as_deref(), Some("3"));
    }

    #[test]
    fn test_parser_summary_matches_record() {
        let parser = RegionParser::new();
        let record = parser.extract(FULL_LINE, "").unwrap();
        let attrs = parser.context_attrs(FULL_LINE, "").unwrap();
        assert_eq!(parser.summary(&attrs), Some(record.summary()));

        let partial = parser.context_attrs("nUser:7", "").unwrap();
        let line = parser.summary(&partial).unwrap();
        assert!(line.starts_with("Region ? (?, ?)"));
        assert!(line.ends_with("users 7"));
    }

    #[test]
    fn test_serialize_camel_case() {
        let attrs = RegionParser::new().extract("nUser:7,hdTot:500", "").unwrap();
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["nUser"], "7");
        assert_eq!(json["hdTot"], "500");
        assert!(json["coreUsed"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_context_attrs_conversion() {
        let attrs = RegionParser::new().context_attrs(FULL_LINE, "").unwrap();
        assert_eq!(attrs.len(), 12);
        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, RegionField::NAMES);
        assert_eq!(attrs.get("location"), Some("Rome"));
    }
}
