use crate::confirm::checker::collect_notices;
use crate::dialog::dialog_model::DialogFactory;
use crate::dialog::markup::NoticeRenderer;
use crate::dialog::presenter::DialogPresenter;
use crate::error::ConfirmError;
use crate::form::form_model::{FormSnapshot, PageSnapshot};
use crate::form::parse::snapshot_fingerprint;
use crate::notify::notifier::Notifier;
use crate::strings::resolver::StringResolver;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::FlowEvent;

/// A submit event as delivered by the host page.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What the widget did with an intercepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDisposition {
    /// The dialog flow started; the submission waits on the user.
    AwaitingConfirmation { notice_count: usize },

    /// A confirmation cycle was already in flight; this submit was dropped.
    Rejected,
}

/// Host-page seam for letting the original submission proceed once the user
/// has confirmed. Implementations must bypass interception.
pub trait FormHost {
    fn submit_native(&mut self);
}

/// Collaborators handed to the widget at attach time.
pub struct WidgetServices {
    pub factory: Box<dyn DialogFactory>,
    pub strings: Box<dyn StringResolver>,
    pub notifier: Box<dyn Notifier>,
    pub renderer: Box<dyn NoticeRenderer>,
}

/// The submission interceptor for one form.
///
/// Owns the dialog presenter (and through it the single dialog instance)
/// explicitly, so several widgets can coexist on one page without shared
/// state.
pub struct ConfirmWidget {
    form_id: String,
    presenter: DialogPresenter,
    tracer: TraceLogger,
    in_flight: bool,
}

impl std::fmt::Debug for ConfirmWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmWidget")
            .field("form_id", &self.form_id)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl ConfirmWidget {
    /// Initialization entry point: verify the target form exists, build the
    /// dialog eagerly, and return the widget ready to intercept submits.
    ///
    /// An unknown form id is a configuration error and fails immediately.
    /// Dialog-creation failures are reported through the notifier and leave
    /// the widget attached but degraded.
    pub fn attach(
        page: &PageSnapshot,
        form_id: &str,
        services: WidgetServices,
        tracer: TraceLogger,
    ) -> Result<Self, ConfirmError> {
        if page.form(form_id).is_none() {
            return Err(ConfirmError::FormNotFound {
                form_id: form_id.to_string(),
            });
        }

        let presenter = DialogPresenter::create(
            services.factory.as_ref(),
            services.strings,
            services.notifier,
            services.renderer,
        );

        Ok(Self {
            form_id: form_id.to_string(),
            presenter,
            tracer,
            in_flight: false,
        })
    }

    /// Handle one submit event.
    ///
    /// Default submission is always suppressed first, whether or not any
    /// field changed. A submit arriving while a confirmation cycle is still
    /// in flight is rejected without touching the dialog.
    pub fn on_submit(
        &mut self,
        event: &mut SubmitEvent,
        form: &FormSnapshot,
    ) -> Result<SubmitDisposition, ConfirmError> {
        event.prevent_default();

        let fingerprint = snapshot_fingerprint(form);
        if self.in_flight {
            self.tracer.log(
                &FlowEvent::now(&self.form_id, "reentry_rejected").with_fingerprint(&fingerprint),
            );
            return Ok(SubmitDisposition::Rejected);
        }

        let notices = collect_notices(form)?;
        self.tracer.log(
            &FlowEvent::now(&self.form_id, "submit_intercepted")
                .with_fingerprint(&fingerprint)
                .with_notices(notices.len()),
        );

        self.presenter.present(&notices);
        self.in_flight = true;

        Ok(SubmitDisposition::AwaitingConfirmation {
            notice_count: notices.len(),
        })
    }

    /// The user confirmed the dialog: let the original submission proceed
    /// through the host seam and close the cycle.
    pub fn on_dialog_confirmed(&mut self, host: &mut dyn FormHost) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        self.tracer.log(&FlowEvent::now(&self.form_id, "confirmed"));
        host.submit_native();
    }

    /// The user dismissed the dialog: close the cycle without submitting.
    pub fn on_dialog_cancelled(&mut self) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        self.tracer.log(&FlowEvent::now(&self.form_id, "cancelled"));
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn presenter(&self) -> &DialogPresenter {
        &self.presenter
    }
}
