//! IPC server for the wellness timer daemon.
//!
//! This module provides Unix Domain Socket IPC functionality:
//! - Server that listens on a Unix socket
//! - Request/response handling for session commands
//! - Integration with TimerEngine for command execution

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::Mutex;
use tokio::time::{timeout, Duration};

use crate::technique::Technique;
use crate::types::{
    BreatheParams, IpcRequest, IpcResponse, MeditateParams, ResponseData,
    DEFAULT_MEDITATION_MINUTES,
};

use super::engine::TimerEngine;

// ============================================================================
// Constants
// ============================================================================

/// Maximum request size in bytes (4KB)
const MAX_REQUEST_SIZE: usize = 4096;

/// Read timeout in seconds
const READ_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// IpcError
// ============================================================================

/// IPC-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// Socket binding error
    #[error("Failed to bind socket: {0}")]
    Bind(String),

    /// Read error
    #[error("Failed to read request: {0}")]
    Read(String),

    /// Timeout error
    #[error("Operation timed out")]
    Timeout,

    /// Request too large
    #[error("Request too large (max {MAX_REQUEST_SIZE} bytes)")]
    RequestTooLarge,
}

// ============================================================================
// IpcServer
// ============================================================================

/// Unix Domain Socket IPC server.
pub struct IpcServer {
    /// Unix socket listener
    listener: UnixListener,
    /// Socket path (for cleanup)
    socket_path: PathBuf,
}

impl IpcServer {
    /// Creates a new IPC server bound to the specified socket path.
    ///
    /// If the socket file already exists, it will be removed before binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound.
    pub fn new(socket_path: &Path) -> Result<Self> {
        // Remove existing socket file if present
        if socket_path.exists() {
            std::fs::remove_file(socket_path)
                .with_context(|| format!("Failed to remove existing socket: {:?}", socket_path))?;
        }

        // Ensure parent directory exists
        if let Some(parent) = socket_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create socket directory: {:?}", parent))?;
        }

        let listener = UnixListener::bind(socket_path)
            .map_err(|e| IpcError::Bind(e.to_string()))
            .with_context(|| format!("Failed to bind Unix socket: {:?}", socket_path))?;

        Ok(Self {
            listener,
            socket_path: socket_path.to_path_buf(),
        })
    }

    /// Accepts an incoming client connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be accepted.
    pub async fn accept(&self) -> Result<UnixStream> {
        let (stream, _addr) = self
            .listener
            .accept()
            .await
            .context("Failed to accept connection")?;
        Ok(stream)
    }

    /// Receives and deserializes an IPC request from the stream.
    ///
    /// Applies a read timeout to prevent blocking indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or deserialization fails.
    pub async fn receive_request(stream: &mut UnixStream) -> Result<IpcRequest> {
        let mut buffer = vec![0u8; MAX_REQUEST_SIZE];

        let read_result = timeout(
            Duration::from_secs(READ_TIMEOUT_SECS),
            stream.read(&mut buffer),
        )
        .await;

        let n = match read_result {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(IpcError::Read(e.to_string()).into()),
            Err(_) => return Err(IpcError::Timeout.into()),
        };

        if n == 0 {
            anyhow::bail!("Connection closed by client");
        }

        let request: IpcRequest = serde_json::from_slice(&buffer[..n])
            .with_context(|| "Failed to deserialize IPC request")?;

        Ok(request)
    }

    /// Serializes and sends an IPC response to the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn send_response(stream: &mut UnixStream, response: &IpcResponse) -> Result<()> {
        let json = serde_json::to_vec(response).context("Failed to serialize IPC response")?;

        stream
            .write_all(&json)
            .await
            .context("Failed to write response")?;
        stream.flush().await.context("Failed to flush response")?;

        Ok(())
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        // Clean up socket file on drop
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

// ============================================================================
// RequestHandler
// ============================================================================

/// Handles IPC requests by dispatching to TimerEngine.
pub struct RequestHandler {
    /// Shared reference to the timer engine
    engine: Arc<Mutex<TimerEngine>>,
}

impl RequestHandler {
    /// Creates a new request handler with the given timer engine.
    pub fn new(engine: Arc<Mutex<TimerEngine>>) -> Self {
        Self { engine }
    }

    /// Handles an IPC request and returns the appropriate response.
    pub async fn handle(&self, request: IpcRequest) -> IpcResponse {
        match request {
            IpcRequest::Breathe { params } => self.handle_breathe(params).await,
            IpcRequest::Meditate { params } => self.handle_meditate(params).await,
            IpcRequest::Technique { technique } => self.handle_technique(&technique).await,
            IpcRequest::Duration { minutes } => self.handle_duration(minutes).await,
            IpcRequest::Pause => self.handle_pause().await,
            IpcRequest::Resume => self.handle_resume().await,
            IpcRequest::Stop => self.handle_stop().await,
            IpcRequest::Status => self.handle_status().await,
        }
    }

    /// Resolves a technique id, logging when the fallback kicks in.
    fn resolve_technique(id: &str) -> Technique {
        let technique = Technique::resolve(id);
        if technique.id() != id {
            tracing::debug!("Unknown technique {:?}, falling back to {}", id, technique.id());
        }
        technique
    }

    /// Handles the breathe command.
    async fn handle_breathe(&self, params: BreatheParams) -> IpcResponse {
        let technique = params
            .technique
            .as_deref()
            .map(Self::resolve_technique)
            .unwrap_or_default();

        let mut engine = self.engine.lock().await;
        match engine.start_breathing(technique) {
            Ok(()) => IpcResponse::success(
                format!("Breathing session started ({})", technique.display_name()),
                Some(ResponseData::from_session(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the meditate command.
    async fn handle_meditate(&self, params: MeditateParams) -> IpcResponse {
        let minutes = params.minutes.unwrap_or(DEFAULT_MEDITATION_MINUTES);

        let mut engine = self.engine.lock().await;
        match engine.start_meditation(minutes) {
            Ok(()) => IpcResponse::success(
                format!("Meditation started ({} min)", minutes),
                Some(ResponseData::from_session(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the technique command.
    async fn handle_technique(&self, id: &str) -> IpcResponse {
        let technique = Self::resolve_technique(id);

        let mut engine = self.engine.lock().await;
        match engine.set_technique(technique) {
            Ok(()) => IpcResponse::success(
                format!("Technique set to {}", technique.display_name()),
                Some(ResponseData::from_session(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the duration command.
    async fn handle_duration(&self, minutes: u32) -> IpcResponse {
        let mut engine = self.engine.lock().await;
        match engine.set_duration(minutes) {
            Ok(()) => IpcResponse::success(
                format!("Duration set to {} min", minutes),
                Some(ResponseData::from_session(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the pause command.
    async fn handle_pause(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;
        match engine.pause() {
            Ok(()) => IpcResponse::success(
                "Session paused",
                Some(ResponseData::from_session(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the resume command.
    async fn handle_resume(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;
        match engine.resume() {
            Ok(()) => IpcResponse::success(
                "Session resumed",
                Some(ResponseData::from_session(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the stop command.
    async fn handle_stop(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;
        match engine.stop() {
            Ok(()) => IpcResponse::success(
                "Session stopped",
                Some(ResponseData::from_session(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the status command.
    async fn handle_status(&self) -> IpcResponse {
        let engine = self.engine.lock().await;
        IpcResponse::success("", Some(ResponseData::from_session(engine.state())))
    }
}

// ============================================================================
// Tests
// ============================================================================
