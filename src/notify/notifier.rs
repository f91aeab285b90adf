use std::sync::{Arc, Mutex};

use crate::error::ConfirmError;

/// Fire-and-forget error reporting. No return value is consumed; a notifier
/// must never fail the flow that reports through it.
pub trait Notifier {
    fn exception(&self, error: &ConfirmError);
}

impl<T: Notifier> Notifier for Arc<T> {
    fn exception(&self, error: &ConfirmError) {
        (**self).exception(error);
    }
}

/// Reports to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn exception(&self, error: &ConfirmError) {
        eprintln!("Warning: {}", error);
    }
}

/// Captures reported errors in memory, for embedding hosts and tests.
#[derive(Default)]
pub struct RecordingNotifier {
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> Vec<String> {
        match self.errors.lock() {
            Ok(errors) => errors.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn exception(&self, error: &ConfirmError) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(error.to_string());
        }
    }
}
