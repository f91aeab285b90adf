use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One step of a confirmation flow, serialized as a JSONL line.
///
/// Stages: submit_intercepted, reentry_rejected, confirmed, cancelled.
#[derive(Debug, Serialize)]
pub struct FlowEvent {
    pub timestamp_ms: u128,
    pub form_id: String,
    pub stage: String,

    pub notice_count: Option<usize>,
    pub fingerprint: Option<String>,
    pub detail: Option<String>,
}

impl FlowEvent {
    pub fn now(form_id: &str, stage: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            form_id: form_id.to_string(),
            stage: stage.to_string(),
            notice_count: None,
            fingerprint: None,
            detail: None,
        }
    }

    pub fn with_notices(mut self, count: usize) -> Self {
        self.notice_count = Some(count);
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: &str) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
