use crate::confirm::interceptor::{ConfirmWidget, WidgetServices};
use crate::error::ConfirmError;
use crate::form::form_model::PageSnapshot;
use crate::trace::logger::TraceLogger;

pub mod cli;
pub mod confirm;
pub mod dialog;
pub mod error;
pub mod form;
pub mod notify;
pub mod strings;
pub mod trace;

/// Attach a confirmation widget to one form in a page snapshot.
///
/// Eagerly creates the dialog and returns the widget that intercepts the
/// form's submit events. The caller owns the widget; nothing is held in
/// module-level state, so several widgets can coexist on one page.
pub fn init(
    page: &PageSnapshot,
    form_id: &str,
    services: WidgetServices,
    tracer: TraceLogger,
) -> Result<ConfirmWidget, ConfirmError> {
    ConfirmWidget::attach(page, form_id, services, tracer)
}
