use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use form_confirm::confirm::interceptor::{ConfirmWidget, WidgetServices};
use form_confirm::dialog::dialog_model::{DialogRecord, RecordingDialogFactory};
use form_confirm::dialog::markup::HtmlNoticeRenderer;
use form_confirm::error::ConfirmError;
use form_confirm::form::form_model::{FormElement, FormSnapshot, PageSnapshot};
use form_confirm::notify::notifier::RecordingNotifier;
use form_confirm::strings::resolver::{StringResolver, TableResolver};
use form_confirm::trace::logger::TraceLogger;

// =========================================================================
// Snapshot fixtures
// =========================================================================

pub fn text_element(
    name: &str,
    value: &str,
    confirm: Option<&str>,
    label: Option<&str>,
) -> FormElement {
    FormElement {
        name: name.to_string(),
        r#type: Some("text".to_string()),
        value: Some(Value::String(value.to_string())),
        checked: false,
        confirm: confirm.map(|c| c.to_string()),
        label: label.map(|l| l.to_string()),
    }
}

pub fn number_element(
    name: &str,
    value: i64,
    confirm: Option<&str>,
    label: Option<&str>,
) -> FormElement {
    FormElement {
        name: name.to_string(),
        r#type: Some("number".to_string()),
        value: Some(json!(value)),
        checked: false,
        confirm: confirm.map(|c| c.to_string()),
        label: label.map(|l| l.to_string()),
    }
}

pub fn checkbox_element(
    name: &str,
    checked: bool,
    confirm: Option<&str>,
    label: Option<&str>,
) -> FormElement {
    FormElement {
        name: name.to_string(),
        r#type: Some("checkbox".to_string()),
        value: Some(Value::String("1".to_string())),
        checked,
        confirm: confirm.map(|c| c.to_string()),
        label: label.map(|l| l.to_string()),
    }
}

pub fn form(id: &str, elements: Vec<FormElement>) -> FormSnapshot {
    FormSnapshot {
        id: id.to_string(),
        elements,
    }
}

pub fn page(forms: Vec<FormSnapshot>) -> PageSnapshot {
    PageSnapshot {
        url: Some("https://app.example.com/settings".to_string()),
        title: "Course settings".to_string(),
        forms,
    }
}

// =========================================================================
// Service doubles
// =========================================================================

/// Resolver whose every lookup fails.
pub struct FailingResolver;

impl StringResolver for FailingResolver {
    fn get_string(&self, key: &str, component: Option<&str>) -> Result<String, ConfirmError> {
        Err(ConfirmError::StringResolution {
            key: key.to_string(),
            component: component.map(|c| c.to_string()),
            detail: "resolver offline".to_string(),
        })
    }
}

/// Attach a widget wired to recording collaborators and built-in strings.
pub fn recording_widget(
    page: &PageSnapshot,
    form_id: &str,
) -> (
    ConfirmWidget,
    Arc<Mutex<DialogRecord>>,
    Arc<RecordingNotifier>,
) {
    let factory = RecordingDialogFactory::new();
    let record = factory.record();
    let notifier = Arc::new(RecordingNotifier::new());

    let services = WidgetServices {
        factory: Box::new(factory),
        strings: Box::new(TableResolver::builtin()),
        notifier: Box::new(Arc::clone(&notifier)),
        renderer: Box::new(HtmlNoticeRenderer),
    };

    let widget = ConfirmWidget::attach(page, form_id, services, TraceLogger::disabled())
        .expect("widget should attach to an existing form");

    (widget, record, notifier)
}
