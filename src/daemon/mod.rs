//! Daemon for the wellness timer.
//!
//! This module contains the daemon functionality:
//! - `engine`: Timer engine driving breathing phases and the countdown
//! - `ipc`: Unix socket server and request dispatch
//!
//! The daemon owns one engine, one ticking task and one event consumer; all
//! CLI subcommands talk to it over the socket.

pub mod engine;
pub mod ipc;

pub use engine::{TimerEngine, TimerEvent};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, trace, warn};

use ipc::{IpcServer, RequestHandler};

/// Socket path relative to the home directory.
const SOCKET_RELATIVE_PATH: &str = ".mindful/mindful.sock";

/// Returns the default daemon socket path (`~/.mindful/mindful.sock`).
pub fn default_socket_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(SOCKET_RELATIVE_PATH))
}

/// Runs the daemon until ctrl-c.
///
/// Spawns the engine's single ticking task and the event consumer, then
/// serves IPC requests from the given socket path. Every accepted connection
/// is handled on its own task; connection failures are logged and never take
/// the daemon down.
pub async fn run(socket_path: &Path) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(TimerEngine::new(event_tx)));

    let ticker = tokio::spawn(TimerEngine::run(engine.clone()));
    let logger = tokio::spawn(log_events(event_rx));

    let server = IpcServer::new(socket_path)?;
    let handler = Arc::new(RequestHandler::new(engine));
    info!("Daemon listening on {}", server.socket_path().display());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
            accepted = server.accept() => {
                match accepted {
                    Ok(mut stream) => {
                        let handler = handler.clone();
                        tokio::spawn(async move {
                            match IpcServer::receive_request(&mut stream).await {
                                Ok(request) => {
                                    let response = handler.handle(request).await;
                                    if let Err(e) =
                                        IpcServer::send_response(&mut stream, &response).await
                                    {
                                        warn!("Failed to send response: {:#}", e);
                                    }
                                }
                                Err(e) => warn!("Failed to read request: {:#}", e),
                            }
                        });
                    }
                    Err(e) => warn!("Failed to accept connection: {:#}", e),
                }
            }
        }
    }

    ticker.abort();
    logger.abort();
    Ok(())
}

/// Consumes engine events and logs them.
///
/// Completion of a meditation countdown is surfaced here; recording the
/// finished session with any external service hangs off this consumer.
async fn log_events(mut event_rx: mpsc::UnboundedReceiver<TimerEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            TimerEvent::BreathingStarted { technique } => {
                info!("Breathing session started: {}", technique.display_name());
            }
            TimerEvent::PhaseAdvanced { phase_index, label } => {
                debug!("Phase {} ({})", phase_index, label);
            }
            TimerEvent::MeditationStarted { total_seconds } => {
                info!("Meditation started: {}s", total_seconds);
            }
            TimerEvent::Tick { remaining_seconds } => {
                trace!("Tick: {}s remaining", remaining_seconds);
            }
            TimerEvent::Completed { total_seconds } => {
                info!("Meditation session complete: {}s", total_seconds);
            }
            TimerEvent::TechniqueChanged { technique } => {
                info!("Technique switched to {}", technique.display_name());
            }
            TimerEvent::DurationChanged { total_seconds } => {
                info!("Duration set to {}s", total_seconds);
            }
            TimerEvent::Paused => info!("Session paused"),
            TimerEvent::Resumed => info!("Session resumed"),
            TimerEvent::Stopped => info!("Session stopped"),
        }
    }
}
