//! Main TUI runner - entry point and event loop
//!
//! Owns the application lifecycle: terminal setup, the log poller task, the
//! message loop driving `syllo_app::update`, and dispatching backend actions
//! as spawned tasks whose completions come back as messages.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use syllo_app::handler::UpdateAction;
use syllo_app::message::Message;
use syllo_app::state::AppState;
use syllo_app::{update, Settings};
use syllo_client::SearchService;
use syllo_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application
pub async fn run(service: Arc<dyn SearchService>, settings: &Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new();

    // Unified message channel: poller, backend completions, follow-ups
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Lifecycle-scoped poller: started here, aborted on teardown
    let poller = spawn_log_poller(
        service.clone(),
        msg_tx.clone(),
        Duration::from_secs(settings.poll.interval_secs),
    );

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &service);

    poller.abort();

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    service: &Arc<dyn SearchService>,
) -> Result<()> {
    while !state.should_quit() {
        // Drain messages from background tasks and the poller
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, service);
        }

        // Poll terminal events (50ms timeout, Tick on idle)
        if let Some(msg) = event::poll()? {
            process_message(state, msg, &msg_tx, service);
        }

        terminal.draw(|frame| render::view(frame, state))?;
    }
    Ok(())
}

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<dyn SearchService>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), service.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Dispatch an action as a background task.
///
/// Each task performs exactly one backend call and reports the outcome as a
/// message. Send failures are ignored: they only happen on shutdown.
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<dyn SearchService>,
) {
    match action {
        UpdateAction::Search { seq, query } => {
            tokio::spawn(async move {
                let started = Instant::now();
                let message = match service.search(&query).await {
                    Ok(response) => Message::SearchCompleted {
                        seq,
                        response,
                        elapsed: started.elapsed(),
                    },
                    Err(e) => Message::SearchFailed {
                        seq,
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(message).await;
            });
        }

        UpdateAction::UploadPdf { seq, path } => {
            tokio::spawn(async move {
                let started = Instant::now();
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "document.pdf".to_string());

                let message = match tokio::fs::read(&path).await {
                    Err(e) => Message::UploadFailed {
                        seq,
                        error: format!("cannot read {}: {e}", path.display()),
                    },
                    Ok(bytes) => match service.upload_pdf(bytes, &filename).await {
                        Ok(result) => Message::UploadCompleted {
                            seq,
                            result,
                            elapsed: started.elapsed(),
                        },
                        Err(e) => Message::UploadFailed {
                            seq,
                            error: e.to_string(),
                        },
                    },
                };
                let _ = msg_tx.send(message).await;
            });
        }

        UpdateAction::Deploy => {
            tokio::spawn(async move {
                let success = match service.deploy().await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("deploy failed: {e}");
                        false
                    }
                };
                let _ = msg_tx.send(Message::DeployCompleted { success }).await;
            });
        }

        UpdateAction::ClearLogs => {
            tokio::spawn(async move {
                let message = match service.clear_logs().await {
                    Ok(()) => Message::LogsCleared,
                    Err(e) => Message::LogsClearFailed {
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(message).await;
            });
        }
    }
}

/// Spawn the log poller: fetch the log snapshot on a fixed period and report
/// each outcome as a message.
///
/// The first fetch fires immediately; later ticks are wall-clock scheduled
/// and lossy under overlap (each snapshot replaces the buffer, so skipped
/// ticks lose nothing that the next one does not recover).
pub fn spawn_log_poller(
    service: Arc<dyn SearchService>,
    msg_tx: mpsc::Sender<Message>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let message = match service.fetch_logs().await {
                Ok(snapshot) => Message::LogsFetched { snapshot },
                Err(e) => Message::LogsFetchFailed {
                    error: e.to_string(),
                },
            };
            if msg_tx.send(message).await.is_err() {
                // Receiver gone: the view was torn down
                break;
            }
        }
    })
}
