//! Analytics hook: an injected sink for product analytics events. The
//! widget fires named events; the sink decides what to do with them.

use tracing::info;

/// Fired once per non-empty submission, before parsing, so rejected
/// submissions are counted too.
pub const EVENT_GENERATE: &str = "chat_generate";

/// The analytics seam. Tracking is fire-and-forget; sinks must be cheap
/// and must not fail.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &str);
}

/// Drops every event. Used when analytics are disabled.
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn track(&self, _event: &str) {}
}

/// Writes events to the log. Stands in for a real analytics backend.
pub struct LoggingAnalytics;

impl AnalyticsSink for LoggingAnalytics {
    fn track(&self, event: &str) {
        info!("analytics event: {event}");
    }
}
