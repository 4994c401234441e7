//! Per-request context passed to every driver call.

use std::fmt;

/// Request context.
///
/// Carries only request metadata; never credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// Identifier used to correlate log lines of one request.
    pub request_id: String,
}

impl Context {
    /// Create a context for the given request id.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.request_id.is_empty() {
            f.write_str("req-unknown")
        } else {
            f.write_str(&self.request_id)
        }
    }
}
