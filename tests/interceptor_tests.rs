mod common;

use common::{checkbox_element, form, page, recording_widget, text_element};
use form_confirm::confirm::interceptor::{
    ConfirmWidget, FormHost, SubmitDisposition, SubmitEvent, WidgetServices,
};
use form_confirm::dialog::dialog_model::RecordingDialogFactory;
use form_confirm::dialog::markup::HtmlNoticeRenderer;
use form_confirm::error::ConfirmError;
use form_confirm::notify::notifier::RecordingNotifier;
use form_confirm::strings::resolver::TableResolver;
use form_confirm::trace::logger::TraceLogger;

struct CountingHost {
    submits: usize,
}

impl FormHost for CountingHost {
    fn submit_native(&mut self) {
        self.submits += 1;
    }
}

fn changed_form() -> form_confirm::form::form_model::FormSnapshot {
    form(
        "settings",
        vec![
            text_element("a", "5", Some("5"), Some("Start date")),
            text_element("b", "7", Some("3"), Some("End date")),
            checkbox_element("c", false, Some("1"), Some("Send notifications")),
        ],
    )
}

// =========================================================================
// Interception basics
// =========================================================================

#[test]
fn submit_always_prevents_default() {
    let form = form(
        "settings",
        vec![text_element("a", "5", Some("5"), Some("Start date"))],
    );
    let page = page(vec![form.clone()]);
    let (mut widget, _record, _notifier) = recording_widget(&page, "settings");

    let mut event = SubmitEvent::new();
    let disposition = widget.on_submit(&mut event, &form).expect("submit handled");

    assert!(
        event.default_prevented(),
        "Default submission is suppressed even when nothing changed"
    );
    assert_eq!(
        disposition,
        SubmitDisposition::AwaitingConfirmation { notice_count: 0 }
    );
}

#[test]
fn changed_fields_are_counted_and_presented() {
    let form = changed_form();
    let page = page(vec![form.clone()]);
    let (mut widget, record, _notifier) = recording_widget(&page, "settings");

    let mut event = SubmitEvent::new();
    let disposition = widget.on_submit(&mut event, &form).expect("submit handled");

    assert_eq!(
        disposition,
        SubmitDisposition::AwaitingConfirmation { notice_count: 2 },
        "B and C changed"
    );

    let record = record.lock().expect("record lock");
    assert_eq!(record.show_count, 1, "Dialog shown once");
    let content = record.bodies.last().expect("content body set");
    assert!(content.contains("End date"), "Content lists changed field B");
    assert!(
        content.contains("Send notifications"),
        "Content lists changed checkbox C"
    );
}

// =========================================================================
// Re-entrancy
// =========================================================================

#[test]
fn reentrant_submit_is_rejected() {
    let form = changed_form();
    let page = page(vec![form.clone()]);
    let (mut widget, record, _notifier) = recording_widget(&page, "settings");

    let mut first = SubmitEvent::new();
    widget.on_submit(&mut first, &form).expect("first submit");
    assert!(widget.in_flight());

    let mut second = SubmitEvent::new();
    let disposition = widget.on_submit(&mut second, &form).expect("second submit");

    assert_eq!(disposition, SubmitDisposition::Rejected);
    assert!(
        second.default_prevented(),
        "Rejected submits still suppress the default action"
    );
    assert_eq!(
        record.lock().expect("record lock").show_count,
        1,
        "The in-flight dialog is not touched again"
    );
}

// =========================================================================
// Completion paths
// =========================================================================

#[test]
fn confirm_triggers_exactly_one_native_submission() {
    let form = changed_form();
    let page = page(vec![form.clone()]);
    let (mut widget, _record, _notifier) = recording_widget(&page, "settings");

    let mut event = SubmitEvent::new();
    widget.on_submit(&mut event, &form).expect("submit handled");

    let mut host = CountingHost { submits: 0 };
    widget.on_dialog_confirmed(&mut host);
    assert_eq!(host.submits, 1, "Confirmation lets the submission proceed");
    assert!(!widget.in_flight(), "Cycle closed");

    widget.on_dialog_confirmed(&mut host);
    assert_eq!(host.submits, 1, "Confirming without a pending cycle is a no-op");
}

#[test]
fn cancel_closes_cycle_without_submitting() {
    let form = changed_form();
    let page = page(vec![form.clone()]);
    let (mut widget, record, _notifier) = recording_widget(&page, "settings");

    let mut event = SubmitEvent::new();
    widget.on_submit(&mut event, &form).expect("submit handled");
    widget.on_dialog_cancelled();

    assert!(!widget.in_flight(), "Cycle closed");

    // A fresh submit starts a new cycle.
    let mut next = SubmitEvent::new();
    let disposition = widget.on_submit(&mut next, &form).expect("next submit");
    assert_eq!(
        disposition,
        SubmitDisposition::AwaitingConfirmation { notice_count: 2 }
    );
    assert_eq!(
        record.lock().expect("record lock").show_count,
        2,
        "Dialog shown again for the new cycle"
    );
}

// =========================================================================
// Configuration failures
// =========================================================================

#[test]
fn attach_fails_for_unknown_form_id() {
    let page = page(vec![changed_form()]);
    let notifier = RecordingNotifier::new();

    let services = WidgetServices {
        factory: Box::new(RecordingDialogFactory::new()),
        strings: Box::new(TableResolver::builtin()),
        notifier: Box::new(notifier),
        renderer: Box::new(HtmlNoticeRenderer),
    };

    let err = ConfirmWidget::attach(&page, "missing", services, TraceLogger::disabled())
        .expect_err("unknown form id must fail");
    match err {
        ConfirmError::FormNotFound { form_id } => assert_eq!(form_id, "missing"),
        other => panic!("Expected FormNotFound, got {:?}", other),
    }
}

#[test]
fn missing_label_error_does_not_open_a_cycle() {
    let broken = form("settings", vec![text_element("b", "7", Some("3"), None)]);
    let page = page(vec![broken.clone()]);
    let (mut widget, record, _notifier) = recording_widget(&page, "settings");

    let mut event = SubmitEvent::new();
    let err = widget.on_submit(&mut event, &broken).expect_err("defect surfaces");

    assert!(matches!(err, ConfirmError::MissingLabel { .. }));
    assert!(event.default_prevented(), "Default was suppressed before the failure");
    assert!(!widget.in_flight(), "No cycle opened");
    assert_eq!(
        record.lock().expect("record lock").show_count,
        0,
        "Dialog never shown"
    );

    // The same widget still works once the markup is fixed.
    let fixed = changed_form();
    let mut next = SubmitEvent::new();
    widget.on_submit(&mut next, &fixed).expect("fixed form submits");
}
