//! Parsers for pseudo-file contents.
//!
//! These are pure functions that parse the text of os-release, meminfo,
//! loadavg and the mount table into structured data. They are designed to
//! be easily testable with string inputs.

use std::collections::HashMap;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Strips one layer of surrounding double quotes from an os-release value.
///
/// A value that opens a quote without closing it is malformed and yields
/// no value at all, rather than a half-quoted string.
fn unquote(value: &str) -> Option<&str> {
    match value.strip_prefix('"') {
        Some(inner) => inner.strip_suffix('"'),
        None => Some(value),
    }
}

/// Parses os-release `KEY=value` content into a key/value map.
///
/// Lines without `=` are ignored; the split is on the first `=` only, so
/// values may themselves contain `=`. Malformed quoting drops the line.
pub fn parse_os_release(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in content.lines() {
        if let Some((key, value)) = line.split_once('=')
            && let Some(value) = unquote(value)
        {
            values.insert(key.to_string(), value.to_string());
        }
    }
    values
}

/// Parses meminfo `Key: value unit` content into a key -> integer map.
///
/// The value is the first whitespace-delimited integer token after the
/// colon; the unit suffix is ignored. Unlike the other parsers, a single
/// malformed line fails the whole file.
pub fn parse_meminfo(content: &str) -> Result<HashMap<String, u64>, ParseError> {
    let mut values = HashMap::new();
    for line in content.lines() {
        let (key, rest) = line
            .split_once(':')
            .ok_or_else(|| ParseError::new(format!("missing ':' in meminfo line {:?}", line)))?;
        let value: u64 = rest
            .split_whitespace()
            .next()
            .ok_or_else(|| ParseError::new(format!("missing value for {:?}", key)))?
            .parse()
            .map_err(|_| ParseError::new(format!("invalid value for {:?}", key)))?;
        values.insert(key.to_string(), value);
    }
    Ok(values)
}

/// Parses loadavg content into the three load average tokens.
///
/// Tokens are kept as text to preserve the kernel's exact formatting.
pub fn parse_loadavg(content: &str) -> Result<[String; 3], ParseError> {
    let mut parts = content.split_whitespace();
    let mut next = || {
        parts
            .next()
            .map(str::to_string)
            .ok_or_else(|| ParseError::new("invalid loadavg format"))
    };
    Ok([next()?, next()?, next()?])
}

/// One parsed line of the mount table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountRecord {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
}

/// Parses mount-table content.
///
/// Only the first three whitespace-separated fields are used (device,
/// mount point, filesystem type); real mount tables carry at least six.
/// Source order is preserved and entries are not deduplicated.
pub fn parse_mounts(content: &str) -> Vec<MountRecord> {
    let mut mounts = Vec::new();

    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue; // Skip malformed lines
        }
        mounts.push(MountRecord {
            device: parts[0].to_string(),
            mount_point: parts[1].to_string(),
            fs_type: parts[2].to_string(),
        });
    }

    mounts
}
