mod analytics;
mod config;
mod errors;
mod generation;
mod models;
mod render;
mod repl;
mod widget;

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::analytics::{AnalyticsSink, LoggingAnalytics, NoopAnalytics};
use crate::config::Config;
use crate::generation::generator::StaticResumeGenerator;
use crate::render::TerminalRenderer;
use crate::widget::ChatWidget;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume chat v{}", env!("CARGO_PKG_VERSION"));

    // Static generator by default; real backends implement the same trait.
    let generator = Arc::new(StaticResumeGenerator);

    // Analytics sink (logging when enabled via CHAT_ANALYTICS, otherwise no-op)
    let analytics: Arc<dyn AnalyticsSink> = if config.analytics_enabled {
        info!("Analytics sink enabled");
        Arc::new(LoggingAnalytics)
    } else {
        Arc::new(NoopAnalytics)
    };

    let mut widget = ChatWidget::new(generator, analytics);
    widget.subscribe(Box::new(TerminalRenderer::new()));

    let session_id = Uuid::new_v4();
    info!(
        "Session {} started at {}",
        session_id,
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );

    repl::run(&mut widget).await?;

    info!(
        "Session {} ended with {} message(s) in the transcript",
        session_id,
        widget.messages().len()
    );

    Ok(())
}
