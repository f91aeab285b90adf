use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::trace::FlowEvent;

/// Append-only JSONL sink for flow events. Tracing problems degrade to
/// stderr warnings; they never fail the confirmation flow.
pub struct TraceLogger {
    file: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: could not open flow trace file '{}': {}", path, e);
                Self { file: None }
            }
        }
    }

    /// A logger that drops every event.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn log(&self, event: &FlowEvent) {
        let Some(file_mutex) = &self.file else {
            return;
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize flow event: {}", e);
                return;
            }
        };

        match file_mutex.lock() {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", json) {
                    eprintln!("Warning: failed to write flow event: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Warning: flow trace lock poisoned: {}", e);
            }
        }
    }
}
