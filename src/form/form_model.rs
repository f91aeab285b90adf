use serde::Deserialize;
use serde_json::Value;

/// A single form control as delivered by page extraction.
///
/// `value` arrives as raw JSON: string for text-like inputs, number for
/// numeric widgets, bool where the extraction reports toggles that way.
/// `confirm` is the per-field expected-value annotation; fields without it
/// are not subject to confirmation at all.
#[derive(Debug, Clone, Deserialize)]
pub struct FormElement {
    pub name: String,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub confirm: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl FormElement {
    pub fn is_checkbox(&self) -> bool {
        self.r#type.as_deref() == Some("checkbox")
    }
}

/// A form and its controls, in declaration order.
#[derive(Debug, Clone, Deserialize)]
pub struct FormSnapshot {
    pub id: String,
    #[serde(default)]
    pub elements: Vec<FormElement>,
}

/// One extracted page: title, url, and every form found on it.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub url: Option<String>,
    pub title: String,
    pub forms: Vec<FormSnapshot>,
}

impl PageSnapshot {
    /// Look up a form by its id attribute.
    pub fn form(&self, id: &str) -> Option<&FormSnapshot> {
        self.forms.iter().find(|f| f.id == id)
    }
}
