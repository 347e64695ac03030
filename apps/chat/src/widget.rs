#![allow(dead_code)]

//! The chat widget: message history, transient reply buffer, loading flag.
//!
//! All mutation goes through `submit` and `clear`, and every mutation
//! notifies the registered observers in order, so a renderer can redraw
//! as state changes without polling.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analytics::{AnalyticsSink, EVENT_GENERATE};
use crate::errors::AppError;
use crate::generation::generator::ResumeGenerator;
use crate::generation::request::parse_request;
use crate::models::message::ChatMessage;

// ────────────────────────────────────────────────────────────────────────────
// Events and observers
// ────────────────────────────────────────────────────────────────────────────

/// State change notifications, fired after each mutation.
///
/// For one accepted submission the order is exactly:
/// `LoadingChanged(true)`, `MessageAppended(user)`,
/// `MessageAppended(assistant)`, `LoadingChanged(false)`.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    LoadingChanged(bool),
    MessageAppended(ChatMessage),
    TranscriptCleared,
}

/// Receives widget state changes. The terminal renderer implements this;
/// tests implement it with a recording observer.
pub trait WidgetObserver: Send {
    fn on_event(&mut self, event: &WidgetEvent);
}

/// What a submission did to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input; nothing changed.
    Skipped,
    /// Assistant reply appended.
    Answered,
    /// Input rejected; an assistant error reply was appended instead.
    Rejected,
}

// ────────────────────────────────────────────────────────────────────────────
// Widget state and operations
// ────────────────────────────────────────────────────────────────────────────

pub struct ChatWidget {
    messages: Vec<ChatMessage>,
    current_reply: String,
    loading: bool,
    generator: Arc<dyn ResumeGenerator>,
    analytics: Arc<dyn AnalyticsSink>,
    observers: Vec<Box<dyn WidgetObserver>>,
}

impl ChatWidget {
    pub fn new(generator: Arc<dyn ResumeGenerator>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            messages: Vec::new(),
            current_reply: String::new(),
            loading: false,
            generator,
            analytics,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn WidgetObserver>) {
        self.observers.push(observer);
    }

    /// The conversation history, in insertion order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The in-flight assistant message. Empty outside a submission.
    pub fn current_reply(&self) -> &str {
        &self.current_reply
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Handles one submission from the input surface.
    ///
    /// Empty input is a no-op. Everything else appends the user message,
    /// then either the generated reply or an error reply; input failures
    /// never propagate out of here (see `AppError::user_reply`).
    pub async fn submit(&mut self, raw_input: &str) -> SubmitOutcome {
        if raw_input.is_empty() {
            return SubmitOutcome::Skipped;
        }

        self.set_loading(true);
        // Fired before parsing: rejected submissions count too.
        self.analytics.track(EVENT_GENERATE);
        self.append(ChatMessage::user(raw_input.to_string()));

        let request = match parse_request(raw_input) {
            Ok(request) => request,
            Err(e) => return self.reject(e),
        };

        let resume = match self
            .generator
            .generate(&request.job_description, &request.user_experience)
            .await
        {
            Ok(resume) => resume,
            Err(e) => return self.reject(e),
        };

        let resume_json = match serde_json::to_string(&resume) {
            Ok(json) => json,
            Err(e) => {
                return self.reject(AppError::Internal(anyhow::anyhow!(
                    "failed to serialize resume: {e}"
                )))
            }
        };
        debug!(
            "generated resume for the {} position",
            request.job_description.title
        );

        self.current_reply = format!(
            "Here's a resume tailored for the {} position: {}",
            request.job_description.title, resume_json
        );
        self.append(ChatMessage::assistant(self.current_reply.clone()));
        self.current_reply.clear();
        self.set_loading(false);
        SubmitOutcome::Answered
    }

    /// Resets the message list and the transient reply buffer.
    ///
    /// Deliberately does not touch the loading flag; the surface is
    /// expected to withhold the clear action mid-submission.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.current_reply.clear();
        self.emit(WidgetEvent::TranscriptCleared);
    }

    /// Appends the error reply for a rejected submission and resets
    /// loading. The user message from earlier in the submission stays.
    fn reject(&mut self, err: AppError) -> SubmitOutcome {
        warn!("submission rejected: {err}");
        self.append(ChatMessage::assistant(err.user_reply()));
        self.set_loading(false);
        SubmitOutcome::Rejected
    }

    fn append(&mut self, message: ChatMessage) {
        self.messages.push(message.clone());
        self.emit(WidgetEvent::MessageAppended(message));
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.emit(WidgetEvent::LoadingChanged(loading));
    }

    fn emit(&mut self, event: WidgetEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
