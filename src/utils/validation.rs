//! Input boundary: turns raw text into records and checks configuration.
//!
//! Text fields longer than the record limits are truncated (see
//! [`Record::new`]) and logged. Priority follows `atoi` rules: leading
//! whitespace, an optional sign, then digits; anything unparsable is 0.
//! Values outside 1-10 are accepted and only logged.

use crate::domain::{Record, KIND_MAX_BYTES, NAME_MAX_BYTES};
use crate::utils::error::{CatalogError, Result};

pub const PRIORITY_MIN: i32 = 1;
pub const PRIORITY_MAX: i32 = 10;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(CatalogError::ConfigValidationError {
        field: field_name.to_string(),
        message: format!(
            "Unsupported value '{}'. Allowed values: {}",
            value,
            allowed.join(", ")
        ),
    })
}

/// Strips the line terminator left by line-based reads.
pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Reads a leading integer the way `atoi` does: leading whitespace, an
/// optional sign, then digits. Anything unparsable is 0; overflow saturates.
pub fn parse_leading_int(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i32 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i32::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Parses a priority. Never fails, range checks only log.
pub fn parse_priority(text: &str) -> i32 {
    parse_leading_int(text)
}

/// Builds a record from raw field text.
pub fn parse_record(name: &str, kind: &str, priority_text: &str) -> Result<Record> {
    let name = strip_line_ending(name);
    let kind = strip_line_ending(kind);
    validate_non_empty_string("name", name)?;

    if name.len() > NAME_MAX_BYTES {
        tracing::warn!("Name '{}' longer than {} bytes, truncating", name, NAME_MAX_BYTES);
    }
    if kind.len() > KIND_MAX_BYTES {
        tracing::warn!("Type '{}' longer than {} bytes, truncating", kind, KIND_MAX_BYTES);
    }

    let priority = parse_priority(strip_line_ending(priority_text));
    if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&priority) {
        tracing::warn!(
            "Priority {} outside {}-{}, keeping it as entered",
            priority,
            PRIORITY_MIN,
            PRIORITY_MAX
        );
    }

    Ok(Record::new(name, kind, priority))
}
