//! # Submission Payload
//!
//! The single value handed to the host on Ctrl+Enter or button press:
//!
//! ```json
//! { "text": "print('hi')", "id": 1760612345678 }
//! ```
//!
//! `id` is wall-clock milliseconds, bumped when needed so that ids are
//! strictly increasing within a session even under rapid resubmission.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub text: String,
    pub id: i64,
}

/// Issues submission ids: milliseconds since the epoch, never repeating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionClock {
    last_id: Option<i64>,
}

impl SubmissionClock {
    /// Next id for a submission made at `now_ms`.
    pub fn next_id(&mut self, now_ms: i64) -> i64 {
        let id = match self.last_id {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last_id = Some(id);
        id
    }
}

/// Current wall-clock time in milliseconds, as fed into `Action::Submit`.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
