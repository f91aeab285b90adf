use serde_json::Value;

use crate::error::ConfirmError;
use crate::form::form_model::{FormSnapshot, PageSnapshot};

/// Build a PageSnapshot from extracted page JSON.
///
/// Expected shape: `{"url": "...", "title": "...", "forms": [...]}` with each
/// form carrying an `id` and an `elements` array.
pub fn parse_page(raw: &Value) -> Result<PageSnapshot, ConfirmError> {
    let forms = raw["forms"]
        .as_array()
        .ok_or_else(|| ConfirmError::SnapshotShape("page snapshot has no 'forms' array".into()))?;

    let forms: Vec<FormSnapshot> = serde_json::from_value(Value::Array(forms.clone())).map_err(
        |e| ConfirmError::SnapshotParse {
            context: "page snapshot 'forms'".into(),
            source: e,
        },
    )?;

    Ok(PageSnapshot {
        url: raw["url"].as_str().map(|s| s.to_string()),
        title: raw["title"].as_str().unwrap_or("").to_string(),
        forms,
    })
}

/// Parse a page snapshot from a JSON document.
pub fn parse_page_str(raw: &str) -> Result<PageSnapshot, ConfirmError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ConfirmError::SnapshotParse {
        context: "page snapshot".into(),
        source: e,
    })?;
    parse_page(&value)
}

/// Stable fingerprint of a form snapshot, for trace correlation.
///
/// Two snapshots with the same controls, values, check states, and
/// annotations hash identically regardless of when they were taken.
pub fn snapshot_fingerprint(form: &FormSnapshot) -> String {
    use sha1::{Digest, Sha1};

    let mut key = String::new();
    key.push_str(&form.id);
    for el in &form.elements {
        key.push_str("::");
        key.push_str(&el.name);
        key.push('=');
        if let Some(value) = &el.value {
            key.push_str(&value.to_string());
        }
        key.push(if el.checked { '+' } else { '-' });
        if let Some(confirm) = &el.confirm {
            key.push('@');
            key.push_str(confirm);
        }
    }

    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}
