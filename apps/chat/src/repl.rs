//! The input surface: a line-oriented session loop over stdin.
//!
//! Each line is one interaction: Enter submits, `:clear` resets the
//! transcript, `:example` prints a sample request, `:quit` ends the
//! session. A submission runs to completion before the next read, so
//! input stays effectively disabled while loading without an explicit
//! guard.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::request::example_request;
use crate::render;
use crate::widget::ChatWidget;

/// What a read line asks the session to do.
#[derive(Debug, PartialEq, Eq)]
enum LineAction<'a> {
    Quit,
    Clear,
    Example,
    Submit(&'a str),
}

fn classify_line(line: &str) -> LineAction<'_> {
    match line {
        ":quit" => LineAction::Quit,
        ":clear" => LineAction::Clear,
        ":example" => LineAction::Example,
        raw => LineAction::Submit(raw),
    }
}

/// Runs the session loop until `:quit` or end of input.
pub async fn run(widget: &mut ChatWidget) -> Result<(), AppError> {
    render::print_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("input closed, ending session");
            break;
        };

        match classify_line(&line) {
            LineAction::Quit => {
                info!("session ended by user");
                break;
            }
            LineAction::Clear => widget.clear(),
            LineAction::Example => {
                let example = serde_json::to_string(&example_request()).map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("failed to serialize example: {e}"))
                })?;
                println!("{example}");
            }
            LineAction::Submit(raw) => {
                let outcome = widget.submit(raw).await;
                debug!("submission outcome: {outcome:?}");
            }
        }
    }

    Ok(())
}
