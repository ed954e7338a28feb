//! Wellness Timer Library
//!
//! This library provides the core functionality for the `mindful` CLI:
//! - Timer engine driving guided breathing phases and meditation countdowns
//! - IPC server/client for daemon-CLI communication
//! - CLI command parsing and display utilities
//! - Static breathing technique catalog
//! - Type definitions for session state and the wire protocol

pub mod cli;
pub mod daemon;
pub mod technique;
pub mod types;

// Re-export commonly used types for convenience
pub use technique::{Phase, Technique};
pub use types::{
    BreatheParams, IpcRequest, IpcResponse, MeditateParams, ResponseData, SessionMode,
    SessionState, TickOutcome,
};

// Re-export daemon types
pub use daemon::{TimerEngine, TimerEvent};
