//! Input Boundary
//!
//! One policy for every field, applied before values reach the estimator:
//! - free text: the leading numeric prefix is used (`"12 miles"` → 12);
//!   empty, non-numeric or non-finite text becomes 0
//! - negative numbers become 0
//! - ordinal selections outside the option list are rejected

use crate::categories::{descriptor, FieldKind};
use crate::data::{CarbonData, Field};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("option {index} is out of range for {field} ({levels} options)")]
    LevelOutOfRange {
        field: Field,
        index: usize,
        levels: usize,
    },

    #[error("expected key=value, got '{0}'")]
    MalformedAssignment(String),
}

/// Clamp a number to the accepted domain (finite, ≥ 0)
#[inline]
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse free-text numeric entry
///
/// Never fails: anything that does not start with a number yields 0.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim_start();
    let prefix = numeric_prefix(text);
    let value = prefix.parse::<f64>().unwrap_or(0.0);
    sanitize_amount(value)
}

/// Longest prefix shaped like a decimal literal: `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &text[..end]
}

/// Record a free-text entry for a field
#[must_use]
pub fn apply_text(data: CarbonData, field: Field, text: &str) -> CarbonData {
    data.with_value(field, parse_amount(text))
}

/// Record an option selection for a field
///
/// Numeric fields accept any index as a plain amount.
pub fn apply_selection(data: CarbonData, field: Field, index: usize) -> Result<CarbonData, InputError> {
    if let Some(levels) = descriptor(field).kind.level_count() {
        if index >= levels {
            return Err(InputError::LevelOutOfRange { field, index, levels });
        }
    }
    Ok(data.with_value(field, index as f64))
}

/// Apply a `key=value` assignment, dispatching on the field's kind
///
/// Ordinal fields take an option index or an exact option label
/// (case-insensitive); numeric fields take free text.
pub fn apply_assignment(data: CarbonData, assignment: &str) -> Result<CarbonData, InputError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| InputError::MalformedAssignment(assignment.to_string()))?;

    let field: Field = key.parse()?;

    match descriptor(field).kind {
        FieldKind::Numeric { .. } => Ok(apply_text(data, field, value)),
        FieldKind::Ordinal { levels } => {
            let value = value.trim();
            let index = match value.parse::<usize>() {
                Ok(index) => index,
                Err(_) => levels
                    .iter()
                    .position(|label| label.eq_ignore_ascii_case(value))
                    .ok_or_else(|| InputError::MalformedAssignment(assignment.to_string()))?,
            };
            apply_selection(data, field, index)
        }
    }
}
