use serde_json::Value;

use crate::error::ConfirmError;
use crate::form::form_model::{FormElement, FormSnapshot};

/// Collect the labels of every annotated field whose current value deviates
/// from its expected value, in declaration order.
///
/// Fields without a `confirm` annotation are skipped entirely. Labels are
/// trimmed of surrounding whitespace. A changed field with no label is a
/// markup/config defect and fails the whole collection.
pub fn collect_notices(form: &FormSnapshot) -> Result<Vec<String>, ConfirmError> {
    let mut notices = Vec::new();

    for el in &form.elements {
        let Some(expected) = el.confirm.as_deref() else {
            continue;
        };
        if !element_changed(el, expected) {
            continue;
        }

        let label = el.label.as_deref().ok_or_else(|| ConfirmError::MissingLabel {
            field: el.name.clone(),
        })?;
        notices.push(label.trim().to_string());
    }

    Ok(notices)
}

/// Type-dependent change detection for one annotated control.
fn element_changed(el: &FormElement, expected: &str) -> bool {
    if el.is_checkbox() {
        return el.checked != numeric_flag(expected);
    }

    match &el.value {
        Some(value) if !value.is_null() => !loose_eq(value, expected),
        // A control with no current value never reports.
        _ => false,
    }
}

/// Loose equality between a current value and its expected-value annotation.
///
/// Annotations are always strings; current values may arrive as strings,
/// numbers, or bools. String vs. string compares exactly (so "1" and "01"
/// differ), numbers and bools coerce the annotation numerically (so 5
/// matches "5" and "05").
pub fn loose_eq(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Number(n) => match n.as_f64() {
            Some(n) => n == coerce_number(expected),
            None => false,
        },
        Value::Bool(b) => (*b as i64 as f64) == coerce_number(expected),
        _ => false,
    }
}

/// Whether an annotation reads as a set flag: nonzero numeric text.
/// Empty or unparsable text reads as unset.
pub fn numeric_flag(text: &str) -> bool {
    let n = coerce_number(text);
    n != 0.0 && !n.is_nan()
}

/// Numeric coercion of annotation text: empty is zero, unparsable is NaN.
fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
