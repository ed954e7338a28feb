//! Core data types for the wellness timer.
//!
//! This module defines the data structures used for:
//! - Session state management (breathing phases, meditation countdown)
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};

use crate::technique::Technique;

/// Default meditation length in minutes when none is requested.
pub const DEFAULT_MEDITATION_MINUTES: u32 = 5;

// ============================================================================
// SessionMode
// ============================================================================

/// The variant-specific state of a timer session.
///
/// Both variants are driven by the same engine: breathing cycles through the
/// technique's phase list indefinitely, meditation counts a fixed total down
/// to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SessionMode {
    /// Guided breathing: cycles through the technique's phases while running
    Breathing {
        /// Active technique
        technique: Technique,
        /// Index into the technique's phase list
        phase_index: usize,
        /// Time left in the current phase, in milliseconds
        phase_remaining_ms: u64,
    },
    /// Meditation countdown: decrements once per second while running
    Meditation {
        /// Configured total, in seconds
        total_seconds: u32,
        /// Seconds left; never exceeds `total_seconds`
        remaining_seconds: u32,
    },
}

// ============================================================================
// TickOutcome
// ============================================================================

/// What a single one-second tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Breathing advanced to the phase at this index
    Advanced(usize),
    /// Meditation decremented to this many remaining seconds
    Counted(u32),
}

// ============================================================================
// SessionState
// ============================================================================

/// The transient state of the one timer session a daemon owns.
///
/// `mode` is `None` until a session is first configured. `running` is the
/// only lifecycle flag: pausing and stopping both clear it and leave the
/// rest of the state visible for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Configured session, if any
    pub mode: Option<SessionMode>,
    /// Whether ticks currently apply
    pub running: bool,
}

impl SessionState {
    /// Creates a fresh state with no configured session.
    pub fn new() -> Self {
        Self {
            mode: None,
            running: false,
        }
    }

    /// Starts a breathing session at phase 0 of the given technique.
    ///
    /// Always restarts: any previous session state is replaced.
    pub fn start_breathing(&mut self, technique: Technique) {
        self.mode = Some(SessionMode::Breathing {
            technique,
            phase_index: 0,
            phase_remaining_ms: technique.phases()[0].duration_ms,
        });
        self.running = true;
    }

    /// Starts a meditation countdown of the given length.
    ///
    /// Zero minutes yields an immediately-expired session: remaining time is
    /// 0 and ticks are no-ops.
    pub fn start_meditation(&mut self, minutes: u32) {
        let total_seconds = minutes.saturating_mul(60);
        self.mode = Some(SessionMode::Meditation {
            total_seconds,
            remaining_seconds: total_seconds,
        });
        self.running = true;
    }

    /// Switches the breathing session to a new technique, restarting from
    /// phase 0. The running flag is preserved.
    ///
    /// Returns `false` without changes while a meditation session exists.
    pub fn set_technique(&mut self, technique: Technique) -> bool {
        if matches!(self.mode, Some(SessionMode::Meditation { .. })) {
            return false;
        }
        self.mode = Some(SessionMode::Breathing {
            technique,
            phase_index: 0,
            phase_remaining_ms: technique.phases()[0].duration_ms,
        });
        true
    }

    /// Replaces the meditation total, resetting remaining time to the new
    /// total. The running flag is preserved.
    ///
    /// Returns `false` without changes while a breathing session exists.
    pub fn set_duration(&mut self, minutes: u32) -> bool {
        if matches!(self.mode, Some(SessionMode::Breathing { .. })) {
            return false;
        }
        let total_seconds = minutes.saturating_mul(60);
        self.mode = Some(SessionMode::Meditation {
            total_seconds,
            remaining_seconds: total_seconds,
        });
        true
    }

    /// Clears the running flag. Phase label and remaining time stay visible.
    ///
    /// Returns `true` if the session was running.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Sets the running flag. Breathing re-enters the sequence at phase 0;
    /// meditation continues from the preserved remaining value.
    ///
    /// Returns `true` if the session was not already running. No-op without
    /// a configured session.
    pub fn resume(&mut self) -> bool {
        if self.running {
            return false;
        }
        match &mut self.mode {
            Some(SessionMode::Breathing {
                technique,
                phase_index,
                phase_remaining_ms,
            }) => {
                *phase_index = 0;
                *phase_remaining_ms = technique.phases()[0].duration_ms;
            }
            Some(SessionMode::Meditation { .. }) => {}
            None => return false,
        }
        self.running = true;
        true
    }

    /// Applies one one-second tick.
    ///
    /// Breathing subtracts 1000 ms from the current phase and, on reaching
    /// zero, advances to the next phase (wrapping past the last). Meditation
    /// decrements remaining seconds; at zero it does nothing, so remaining
    /// time never goes negative.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.running {
            return None;
        }
        match &mut self.mode {
            Some(SessionMode::Breathing {
                technique,
                phase_index,
                phase_remaining_ms,
            }) => {
                *phase_remaining_ms = phase_remaining_ms.saturating_sub(1000);
                if *phase_remaining_ms > 0 {
                    return None;
                }
                let phases = technique.phases();
                *phase_index = (*phase_index + 1) % phases.len();
                *phase_remaining_ms = phases[*phase_index].duration_ms;
                Some(TickOutcome::Advanced(*phase_index))
            }
            Some(SessionMode::Meditation {
                remaining_seconds, ..
            }) => {
                if *remaining_seconds == 0 {
                    return None;
                }
                *remaining_seconds -= 1;
                Some(TickOutcome::Counted(*remaining_seconds))
            }
            None => None,
        }
    }

    /// Returns true if ticks currently apply.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the active technique (breathing sessions only).
    pub fn technique(&self) -> Option<Technique> {
        match self.mode {
            Some(SessionMode::Breathing { technique, .. }) => Some(technique),
            _ => None,
        }
    }

    /// Returns the current phase label (breathing sessions only).
    pub fn phase_label(&self) -> Option<&'static str> {
        match self.mode {
            Some(SessionMode::Breathing {
                technique,
                phase_index,
                ..
            }) => Some(technique.phases()[phase_index].label),
            _ => None,
        }
    }

    /// Returns the current phase index (breathing sessions only).
    pub fn phase_index(&self) -> Option<usize> {
        match self.mode {
            Some(SessionMode::Breathing { phase_index, .. }) => Some(phase_index),
            _ => None,
        }
    }

    /// Returns the remaining seconds (meditation sessions only).
    pub fn remaining_seconds(&self) -> Option<u32> {
        match self.mode {
            Some(SessionMode::Meditation {
                remaining_seconds, ..
            }) => Some(remaining_seconds),
            _ => None,
        }
    }

    /// Returns the configured total in seconds (meditation sessions only).
    pub fn total_seconds(&self) -> Option<u32> {
        match self.mode {
            Some(SessionMode::Meditation { total_seconds, .. }) => Some(total_seconds),
            _ => None,
        }
    }

    /// Returns the wire name of the session mode.
    pub fn mode_name(&self) -> Option<&'static str> {
        match self.mode {
            Some(SessionMode::Breathing { .. }) => Some("breathing"),
            Some(SessionMode::Meditation { .. }) => Some("meditation"),
            None => None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// IPC Types
// ============================================================================

/// Parameters for the breathe command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreatheParams {
    /// Technique id; unrecognized ids fall back to 4-7-8
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
}

/// Parameters for the meditate command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeditateParams {
    /// Countdown length in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
}

/// IPC request from client to daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum IpcRequest {
    /// Configure and start a breathing session
    Breathe {
        /// Breathing parameters
        #[serde(flatten)]
        params: BreatheParams,
    },
    /// Configure and start a meditation countdown
    Meditate {
        /// Meditation parameters
        #[serde(flatten)]
        params: MeditateParams,
    },
    /// Switch the breathing technique (restarts from phase 0)
    Technique {
        /// Technique id
        technique: String,
    },
    /// Replace the meditation total
    Duration {
        /// New total in minutes
        minutes: u32,
    },
    /// Pause the current session
    Pause,
    /// Resume the current session
    Resume,
    /// Stop the current session
    Stop,
    /// Query the current state
    Status,
}

/// Response data for IPC responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    /// Session mode ("breathing" or "meditation")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Lifecycle state ("running", "paused" or "idle")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Active technique id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    /// Current phase label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Remaining seconds of the countdown
    #[serde(rename = "remainingSeconds", skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u32>,
    /// Configured countdown total in seconds
    #[serde(rename = "totalSeconds", skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<u32>,
}

impl ResponseData {
    /// Creates response data from session state.
    pub fn from_session(state: &SessionState) -> Self {
        let lifecycle = if state.is_running() {
            "running"
        } else if state.mode.is_some() {
            "paused"
        } else {
            "idle"
        };

        Self {
            mode: state.mode_name().map(str::to_string),
            state: Some(lifecycle.to_string()),
            technique: state.technique().map(|t| t.id().to_string()),
            phase: state.phase_label().map(str::to_string),
            remaining_seconds: state.remaining_seconds(),
            total_seconds: state.total_seconds(),
        }
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Optional response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // SessionState Tests
    // ------------------------------------------------------------------------

    mod session_state_tests {
        use super::*;

        #[test]
        fn test_new_state_is_idle() {
            let state = SessionState::new();
            assert!(state.mode.is_none());
            assert!(!state.is_running());
            assert_eq!(state.phase_label(), None);
            assert_eq!(state.remaining_seconds(), None);
        }

        #[test]
        fn test_start_breathing_shows_first_phase_immediately() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::FourSevenEight);

            // Phase 0 is observable before any tick elapses.
            assert!(state.is_running());
            assert_eq!(state.phase_index(), Some(0));
            assert_eq!(state.phase_label(), Some("Inhale"));
        }

        #[test]
        fn test_start_breathing_replaces_meditation() {
            let mut state = SessionState::new();
            state.start_meditation(5);
            state.start_breathing(Technique::Box);

            assert_eq!(state.mode_name(), Some("breathing"));
            assert_eq!(state.technique(), Some(Technique::Box));
            assert_eq!(state.remaining_seconds(), None);
        }

        #[test]
        fn test_start_meditation_remaining_equals_total() {
            let mut state = SessionState::new();
            state.start_meditation(5);

            assert!(state.is_running());
            assert_eq!(state.remaining_seconds(), Some(300));
            assert_eq!(state.total_seconds(), Some(300));
        }

        #[test]
        fn test_start_meditation_zero_minutes_is_expired() {
            let mut state = SessionState::new();
            state.start_meditation(0);

            assert_eq!(state.remaining_seconds(), Some(0));
            assert_eq!(state.tick(), None);
            assert_eq!(state.remaining_seconds(), Some(0));
        }

        #[test]
        fn test_set_technique_restarts_from_phase_zero() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::FourSevenEight);

            // Advance partway into the sequence.
            for _ in 0..4 {
                state.tick();
            }
            assert_eq!(state.phase_index(), Some(1));

            assert!(state.set_technique(Technique::Box));
            assert_eq!(state.phase_index(), Some(0));
            assert_eq!(state.technique(), Some(Technique::Box));
            // Running flag carries over the switch.
            assert!(state.is_running());
        }

        #[test]
        fn test_set_technique_refused_during_meditation() {
            let mut state = SessionState::new();
            state.start_meditation(5);

            assert!(!state.set_technique(Technique::Box));
            assert_eq!(state.mode_name(), Some("meditation"));
        }

        #[test]
        fn test_set_technique_configures_idle_state() {
            let mut state = SessionState::new();
            assert!(state.set_technique(Technique::AlternateNostril));
            assert!(!state.is_running());
            assert_eq!(state.phase_label(), Some("Inhale Left"));
        }

        #[test]
        fn test_set_duration_resets_remaining_keeps_running() {
            let mut state = SessionState::new();
            state.start_meditation(10);

            // Burn a few seconds.
            for _ in 0..30 {
                state.tick();
            }
            assert_eq!(state.remaining_seconds(), Some(570));

            assert!(state.set_duration(5));
            assert_eq!(state.remaining_seconds(), Some(300));
            assert_eq!(state.total_seconds(), Some(300));
            assert!(state.is_running());
        }

        #[test]
        fn test_set_duration_keeps_paused_flag() {
            let mut state = SessionState::new();
            state.start_meditation(10);
            state.pause();

            assert!(state.set_duration(5));
            assert!(!state.is_running());
            assert_eq!(state.remaining_seconds(), Some(300));
        }

        #[test]
        fn test_set_duration_refused_during_breathing() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::Box);

            assert!(!state.set_duration(5));
            assert_eq!(state.mode_name(), Some("breathing"));
        }

        #[test]
        fn test_pause_preserves_remaining_time() {
            let mut state = SessionState::new();
            state.start_meditation(5);
            state.tick();
            state.tick();

            assert!(state.pause());
            assert!(!state.is_running());
            assert_eq!(state.remaining_seconds(), Some(298));
        }

        #[test]
        fn test_pause_preserves_phase_label() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::FourSevenEight);
            for _ in 0..4 {
                state.tick();
            }
            assert_eq!(state.phase_label(), Some("Hold"));

            assert!(state.pause());
            // No forced reset of the label.
            assert_eq!(state.phase_label(), Some("Hold"));
        }

        #[test]
        fn test_pause_idempotent() {
            let mut state = SessionState::new();
            state.start_meditation(5);

            assert!(state.pause());
            assert!(!state.pause());
            assert!(!state.pause());
        }

        #[test]
        fn test_pause_without_session() {
            let mut state = SessionState::new();
            assert!(!state.pause());
        }

        #[test]
        fn test_resume_meditation_continues() {
            let mut state = SessionState::new();
            state.start_meditation(5);
            state.tick();
            state.pause();

            assert!(state.resume());
            assert!(state.is_running());
            assert_eq!(state.remaining_seconds(), Some(299));
        }

        #[test]
        fn test_resume_breathing_restarts_at_phase_zero() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::FourSevenEight);
            for _ in 0..4 {
                state.tick();
            }
            state.pause();
            assert_eq!(state.phase_index(), Some(1));

            assert!(state.resume());
            assert_eq!(state.phase_index(), Some(0));
            assert_eq!(state.phase_label(), Some("Inhale"));
        }

        #[test]
        fn test_resume_idempotent() {
            let mut state = SessionState::new();
            state.start_meditation(5);

            assert!(!state.resume());
            assert!(state.is_running());
        }

        #[test]
        fn test_resume_without_session() {
            let mut state = SessionState::new();
            assert!(!state.resume());
            assert!(!state.is_running());
        }
    }

    // ------------------------------------------------------------------------
    // Tick Tests
    // ------------------------------------------------------------------------

    mod tick_tests {
        use super::*;

        #[test]
        fn test_tick_noop_when_not_running() {
            let mut state = SessionState::new();
            assert_eq!(state.tick(), None);

            state.start_meditation(5);
            state.pause();
            assert_eq!(state.tick(), None);
            assert_eq!(state.remaining_seconds(), Some(300));
        }

        #[test]
        fn test_breathing_advances_after_phase_duration() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::FourSevenEight);

            // Inhale lasts 4 seconds: three silent ticks, then an advance.
            assert_eq!(state.tick(), None);
            assert_eq!(state.tick(), None);
            assert_eq!(state.tick(), None);
            assert_eq!(state.tick(), Some(TickOutcome::Advanced(1)));
            assert_eq!(state.phase_label(), Some("Hold"));
        }

        #[test]
        fn test_box_full_cycle_wraps_to_phase_zero() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::Box);

            let mut advances = Vec::new();
            for _ in 0..16 {
                if let Some(TickOutcome::Advanced(index)) = state.tick() {
                    advances.push(index);
                }
            }

            // Four 4-second phases: exactly 4 advances, the last wrapping
            // back to phase 0.
            assert_eq!(advances, vec![1, 2, 3, 0]);
            assert_eq!(state.phase_index(), Some(0));
        }

        #[test]
        fn test_breathing_loops_indefinitely() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::Box);

            let mut advances = 0;
            for _ in 0..48 {
                if state.tick().is_some() {
                    advances += 1;
                }
            }
            assert_eq!(advances, 12);
            assert!(state.is_running());
        }

        #[test]
        fn test_unknown_technique_behaves_like_four_seven_eight() {
            let mut fallback = SessionState::new();
            fallback.start_breathing(Technique::resolve("invalid"));

            let mut reference = SessionState::new();
            reference.start_breathing(Technique::resolve("4-7-8"));

            for _ in 0..20 {
                assert_eq!(fallback.tick(), reference.tick());
                assert_eq!(fallback.phase_label(), reference.phase_label());
            }
        }

        #[test]
        fn test_countdown_decrements_each_tick() {
            let mut state = SessionState::new();
            state.start_meditation(1);

            assert_eq!(state.tick(), Some(TickOutcome::Counted(59)));
            assert_eq!(state.tick(), Some(TickOutcome::Counted(58)));
            assert_eq!(state.remaining_seconds(), Some(58));
        }

        #[test]
        fn test_countdown_halts_at_zero() {
            let mut state = SessionState::new();
            // Two-second countdown, set up directly.
            state.mode = Some(SessionMode::Meditation {
                total_seconds: 2,
                remaining_seconds: 2,
            });
            state.running = true;

            assert_eq!(state.tick(), Some(TickOutcome::Counted(1)));
            assert_eq!(state.tick(), Some(TickOutcome::Counted(0)));

            // A third tick does not decrement below zero.
            assert_eq!(state.tick(), None);
            assert_eq!(state.remaining_seconds(), Some(0));
            // The running flag is not implicitly cleared.
            assert!(state.is_running());
        }

        #[test]
        fn test_duration_change_restarts_ticking_after_expiry() {
            let mut state = SessionState::new();
            state.mode = Some(SessionMode::Meditation {
                total_seconds: 1,
                remaining_seconds: 0,
            });
            state.running = true;

            assert_eq!(state.tick(), None);
            assert!(state.set_duration(1));
            assert_eq!(state.tick(), Some(TickOutcome::Counted(59)));
        }
    }

    // ------------------------------------------------------------------------
    // IPC Types Tests
    // ------------------------------------------------------------------------

    mod ipc_tests {
        use super::*;

        #[test]
        fn test_breathe_request_serialize() {
            let request = IpcRequest::Breathe {
                params: BreatheParams {
                    technique: Some("box".to_string()),
                },
            };
            let json = serde_json::to_string(&request).unwrap();
            assert!(json.contains("\"command\":\"breathe\""));
            assert!(json.contains("\"technique\":\"box\""));
        }

        #[test]
        fn test_breathe_request_deserialize_without_technique() {
            let json = r#"{"command":"breathe"}"#;
            let request: IpcRequest = serde_json::from_str(json).unwrap();
            match request {
                IpcRequest::Breathe { params } => assert!(params.technique.is_none()),
                _ => panic!("Expected Breathe request"),
            }
        }

        #[test]
        fn test_meditate_request_round_trip() {
            let json = r#"{"command":"meditate","minutes":10}"#;
            let request: IpcRequest = serde_json::from_str(json).unwrap();
            match request {
                IpcRequest::Meditate { params } => assert_eq!(params.minutes, Some(10)),
                _ => panic!("Expected Meditate request"),
            }
        }

        #[test]
        fn test_technique_request_deserialize() {
            let json = r#"{"command":"technique","technique":"nostril"}"#;
            let request: IpcRequest = serde_json::from_str(json).unwrap();
            match request {
                IpcRequest::Technique { technique } => assert_eq!(technique, "nostril"),
                _ => panic!("Expected Technique request"),
            }
        }

        #[test]
        fn test_duration_request_deserialize() {
            let json = r#"{"command":"duration","minutes":15}"#;
            let request: IpcRequest = serde_json::from_str(json).unwrap();
            match request {
                IpcRequest::Duration { minutes } => assert_eq!(minutes, 15),
                _ => panic!("Expected Duration request"),
            }
        }

        #[test]
        fn test_simple_commands_serialize() {
            for (request, expected) in [
                (IpcRequest::Pause, r#"{"command":"pause"}"#),
                (IpcRequest::Resume, r#"{"command":"resume"}"#),
                (IpcRequest::Stop, r#"{"command":"stop"}"#),
                (IpcRequest::Status, r#"{"command":"status"}"#),
            ] {
                assert_eq!(serde_json::to_string(&request).unwrap(), expected);
            }
        }

        #[test]
        fn test_response_data_from_idle_session() {
            let state = SessionState::new();
            let data = ResponseData::from_session(&state);

            assert_eq!(data.state, Some("idle".to_string()));
            assert!(data.mode.is_none());
            assert!(data.phase.is_none());
            assert!(data.remaining_seconds.is_none());
        }

        #[test]
        fn test_response_data_from_breathing_session() {
            let mut state = SessionState::new();
            state.start_breathing(Technique::Box);
            let data = ResponseData::from_session(&state);

            assert_eq!(data.mode, Some("breathing".to_string()));
            assert_eq!(data.state, Some("running".to_string()));
            assert_eq!(data.technique, Some("box".to_string()));
            assert_eq!(data.phase, Some("Inhale".to_string()));
            assert!(data.remaining_seconds.is_none());
        }

        #[test]
        fn test_response_data_from_paused_meditation() {
            let mut state = SessionState::new();
            state.start_meditation(5);
            state.pause();
            let data = ResponseData::from_session(&state);

            assert_eq!(data.mode, Some("meditation".to_string()));
            assert_eq!(data.state, Some("paused".to_string()));
            assert_eq!(data.remaining_seconds, Some(300));
            assert_eq!(data.total_seconds, Some(300));
            assert!(data.phase.is_none());
        }

        #[test]
        fn test_response_serialize_skips_absent_fields() {
            let response = IpcResponse::success(
                "OK",
                Some(ResponseData {
                    mode: Some("meditation".to_string()),
                    state: Some("running".to_string()),
                    remaining_seconds: Some(300),
                    ..Default::default()
                }),
            );
            let json = serde_json::to_string(&response).unwrap();
            assert!(json.contains("\"remainingSeconds\":300"));
            assert!(!json.contains("phase"));
            assert!(!json.contains("technique"));
        }

        #[test]
        fn test_response_error() {
            let response = IpcResponse::error("No active session");
            assert_eq!(response.status, "error");
            assert_eq!(response.message, "No active session");
            assert!(response.data.is_none());
        }
    }
}
