use std::sync::{Arc, Mutex};

use crate::error::ConfirmError;

/// Dialog flavor requested from the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Default,
    SaveCancel,
}

/// Everything the factory needs to build a dialog.
#[derive(Debug, Clone)]
pub struct DialogConfig {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
    pub large: bool,
}

/// An opaque modal surface with settable body content.
pub trait Dialog {
    fn set_body(&mut self, markup: &str);
    fn show(&mut self);
}

/// Produces Dialog instances from a config. Fallible; attempted once.
pub trait DialogFactory {
    fn create(&self, config: DialogConfig) -> Result<Box<dyn Dialog>, ConfirmError>;
}

// ============================================================================
// Console dialog — terminal-backed surface for the CLI driver
// ============================================================================

pub struct ConsoleDialog {
    title: String,
    body: String,
    visible: bool,
}

impl Dialog for ConsoleDialog {
    fn set_body(&mut self, markup: &str) {
        self.body = markup.to_string();
        if self.visible {
            println!("{}", self.body);
        }
    }

    fn show(&mut self) {
        self.visible = true;
        println!("=== {} ===", self.title);
        println!("{}", self.body);
    }
}

pub struct ConsoleDialogFactory;

impl DialogFactory for ConsoleDialogFactory {
    fn create(&self, config: DialogConfig) -> Result<Box<dyn Dialog>, ConfirmError> {
        Ok(Box::new(ConsoleDialog {
            title: config.title,
            body: config.body,
            visible: false,
        }))
    }
}

// ============================================================================
// Recording dialog — captures the body history (embedding hosts and tests)
// ============================================================================

/// Everything a recording dialog saw: creation title, every body ever set
/// (the creation body first), and how often it was shown.
#[derive(Debug, Default, Clone)]
pub struct DialogRecord {
    pub title: String,
    pub bodies: Vec<String>,
    pub show_count: usize,
}

pub struct RecordingDialog {
    record: Arc<Mutex<DialogRecord>>,
}

impl Dialog for RecordingDialog {
    fn set_body(&mut self, markup: &str) {
        if let Ok(mut record) = self.record.lock() {
            record.bodies.push(markup.to_string());
        }
    }

    fn show(&mut self) {
        if let Ok(mut record) = self.record.lock() {
            record.show_count += 1;
        }
    }
}

pub struct RecordingDialogFactory {
    record: Arc<Mutex<DialogRecord>>,
    fail_with: Option<String>,
}

impl RecordingDialogFactory {
    pub fn new() -> Self {
        Self {
            record: Arc::new(Mutex::new(DialogRecord::default())),
            fail_with: None,
        }
    }

    /// A factory that refuses every creation with the given reason.
    pub fn failing(reason: &str) -> Self {
        Self {
            record: Arc::new(Mutex::new(DialogRecord::default())),
            fail_with: Some(reason.to_string()),
        }
    }

    /// Handle onto the record; keep a clone before boxing the factory.
    pub fn record(&self) -> Arc<Mutex<DialogRecord>> {
        Arc::clone(&self.record)
    }
}

impl Default for RecordingDialogFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogFactory for RecordingDialogFactory {
    fn create(&self, config: DialogConfig) -> Result<Box<dyn Dialog>, ConfirmError> {
        if let Some(reason) = &self.fail_with {
            return Err(ConfirmError::DialogCreation(reason.clone()));
        }

        if let Ok(mut record) = self.record.lock() {
            record.title = config.title;
            record.bodies.push(config.body);
        }

        Ok(Box::new(RecordingDialog {
            record: Arc::clone(&self.record),
        }))
    }
}
