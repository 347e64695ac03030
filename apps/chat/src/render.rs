//! Terminal rendering: the message item and the session banner.
//!
//! Output here is presentation only; nothing parses it back.

use chrono::Utc;

use crate::models::message::ChatMessage;
use crate::widget::{WidgetEvent, WidgetObserver};

/// Prints widget state changes as they happen: one line per appended
/// message, plus the generating indicator while loading.
#[derive(Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }

    fn print_message(&self, message: &ChatMessage) {
        println!("[{}] {}", message.role.label(), message.content);
    }
}

impl WidgetObserver for TerminalRenderer {
    fn on_event(&mut self, event: &WidgetEvent) {
        match event {
            WidgetEvent::MessageAppended(message) => self.print_message(message),
            WidgetEvent::LoadingChanged(true) => println!("Generating resume..."),
            WidgetEvent::LoadingChanged(false) => {}
            WidgetEvent::TranscriptCleared => println!("(transcript cleared)"),
        }
    }
}

/// Session banner: the prompt label plus the surface commands.
pub fn print_banner() {
    println!("resume chat ({})", Utc::now().format("%Y-%m-%d %H:%M UTC"));
    println!("Please enter a job description and your work experience:");
    println!("Commands: :example shows a sample request, :clear resets, :quit exits.");
}
