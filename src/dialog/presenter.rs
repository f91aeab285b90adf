use crate::dialog::dialog_model::{Dialog, DialogConfig, DialogFactory, DialogKind};
use crate::dialog::markup::{NoticeRenderer, loading_markup};
use crate::notify::notifier::Notifier;
use crate::strings::resolver::StringResolver;

/// Where the presenter is within one presentation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterState {
    Idle,
    Loading,
    ContentShown,
    ErrorReported,
}

/// Owns the single dialog instance and drives it through
/// loading -> content | error on each submission attempt.
///
/// The dialog is built eagerly at creation time and reused across
/// submissions. If creation fails, the failure is reported once through the
/// notifier and the presenter degrades: subsequent presentations are
/// silently skipped.
pub struct DialogPresenter {
    dialog: Option<Box<dyn Dialog>>,
    strings: Box<dyn StringResolver>,
    notifier: Box<dyn Notifier>,
    renderer: Box<dyn NoticeRenderer>,
    state: PresenterState,
}

impl DialogPresenter {
    pub fn create(
        factory: &dyn DialogFactory,
        strings: Box<dyn StringResolver>,
        notifier: Box<dyn Notifier>,
        renderer: Box<dyn NoticeRenderer>,
    ) -> Self {
        let dialog = match strings.get_string("loading", None) {
            Ok(title) => {
                let config = DialogConfig {
                    kind: DialogKind::Default,
                    title,
                    body: loading_markup().to_string(),
                    large: true,
                };
                match factory.create(config) {
                    Ok(dialog) => Some(dialog),
                    Err(e) => {
                        notifier.exception(&e);
                        None
                    }
                }
            }
            Err(e) => {
                notifier.exception(&e);
                None
            }
        };

        Self {
            dialog,
            strings,
            notifier,
            renderer,
            state: PresenterState::Idle,
        }
    }

    /// Run one presentation cycle for a submission attempt.
    ///
    /// Resets the body to the loading indicator, shows the dialog, resolves
    /// the confirmation title (one attempt), then replaces the body with the
    /// rendered notice list. On resolution failure the dialog stays in its
    /// loading state and the error goes to the notifier.
    pub fn present(&mut self, notices: &[String]) {
        let Some(dialog) = self.dialog.as_mut() else {
            // Creation already failed and was reported.
            return;
        };

        dialog.set_body(loading_markup());
        dialog.show();
        self.state = PresenterState::Loading;

        match self.strings.get_string("confirmchanges", Some("form")) {
            Ok(title) => {
                dialog.set_body(&self.renderer.render(&title, notices));
                self.state = PresenterState::ContentShown;
            }
            Err(e) => {
                self.notifier.exception(&e);
                self.state = PresenterState::ErrorReported;
            }
        }
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    /// Whether eager dialog creation failed.
    pub fn is_degraded(&self) -> bool {
        self.dialog.is_none()
    }
}
