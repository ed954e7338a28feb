//! Timer engine for the wellness timer.
//!
//! This module provides the core timer functionality:
//! - One parameterized engine driving both breathing phases and the
//!   meditation countdown
//! - A single 1 Hz ticking task per engine instance
//! - Event firing for display refresh and external recording

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::technique::Technique;
use crate::types::{SessionState, TickOutcome};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for display refresh and external integrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Breathing session started at phase 0
    BreathingStarted {
        /// Active technique
        technique: Technique,
    },
    /// Breathing advanced to a new phase
    PhaseAdvanced {
        /// Index of the new phase
        phase_index: usize,
        /// Label of the new phase
        label: &'static str,
    },
    /// Meditation countdown started
    MeditationStarted {
        /// Configured total in seconds
        total_seconds: u32,
    },
    /// One second elapsed on the countdown
    Tick {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// The countdown reached zero
    Completed {
        /// Configured total in seconds
        total_seconds: u32,
    },
    /// Breathing technique switched
    TechniqueChanged {
        /// New technique
        technique: Technique,
    },
    /// Meditation total replaced
    DurationChanged {
        /// New total in seconds
        total_seconds: u32,
    },
    /// Session paused
    Paused,
    /// Session resumed
    Resumed,
    /// Session stopped
    Stopped,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that manages the session state and events.
///
/// Commands mutate state synchronously; ticking happens on the single task
/// spawned with [`TimerEngine::run`]. Because that task is the only source
/// of ticks for the engine's whole lifetime, reconfiguring or toggling the
/// session can never arm a second timer.
pub struct TimerEngine {
    /// Current session state
    state: SessionState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new TimerEngine with the given event channel.
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: SessionState::new(),
            event_tx,
        }
    }

    /// Runs the ticking loop.
    ///
    /// Locks the engine once per second and applies a tick. Spawn exactly
    /// one of these per engine instance.
    pub async fn run(engine: Arc<Mutex<TimerEngine>>) -> Result<()> {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            engine.lock().await.tick()?;
        }
    }

    /// Applies one one-second tick and fires the resulting events.
    pub fn tick(&mut self) -> Result<()> {
        match self.state.tick() {
            Some(TickOutcome::Advanced(phase_index)) => {
                if let Some(label) = self.state.phase_label() {
                    self.event_tx
                        .send(TimerEvent::PhaseAdvanced { phase_index, label })
                        .context("Failed to send phase advanced event")?;
                }
            }
            Some(TickOutcome::Counted(remaining_seconds)) => {
                self.event_tx
                    .send(TimerEvent::Tick { remaining_seconds })
                    .context("Failed to send tick event")?;

                if remaining_seconds == 0 {
                    let total_seconds = self.state.total_seconds().unwrap_or(0);
                    self.event_tx
                        .send(TimerEvent::Completed { total_seconds })
                        .context("Failed to send completed event")?;
                }
            }
            None => {}
        }

        Ok(())
    }

    /// Starts a breathing session, replacing any previous session.
    ///
    /// The first phase of the technique is observable immediately.
    pub fn start_breathing(&mut self, technique: Technique) -> Result<()> {
        self.state.start_breathing(technique);

        self.event_tx
            .send(TimerEvent::BreathingStarted { technique })
            .context("Failed to send breathing started event")?;

        Ok(())
    }

    /// Starts a meditation countdown, replacing any previous session.
    pub fn start_meditation(&mut self, minutes: u32) -> Result<()> {
        self.state.start_meditation(minutes);
        let total_seconds = self.state.total_seconds().unwrap_or(0);

        self.event_tx
            .send(TimerEvent::MeditationStarted { total_seconds })
            .context("Failed to send meditation started event")?;

        Ok(())
    }

    /// Switches the breathing technique, restarting from phase 0 of the new
    /// technique. The running flag is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error while a meditation session exists.
    pub fn set_technique(&mut self, technique: Technique) -> Result<()> {
        if !self.state.set_technique(technique) {
            anyhow::bail!("A meditation session is active; stop it before switching techniques");
        }

        self.event_tx
            .send(TimerEvent::TechniqueChanged { technique })
            .context("Failed to send technique changed event")?;

        Ok(())
    }

    /// Replaces the meditation total, resetting remaining time. The running
    /// flag is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error while a breathing session exists.
    pub fn set_duration(&mut self, minutes: u32) -> Result<()> {
        if !self.state.set_duration(minutes) {
            anyhow::bail!("A breathing session is active; duration applies to meditation");
        }
        let total_seconds = self.state.total_seconds().unwrap_or(0);

        self.event_tx
            .send(TimerEvent::DurationChanged { total_seconds })
            .context("Failed to send duration changed event")?;

        Ok(())
    }

    /// Pauses the session. Calling pause on an already-paused session is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if no session has been configured.
    pub fn pause(&mut self) -> Result<()> {
        if self.state.mode.is_none() {
            anyhow::bail!("No active session");
        }

        if self.state.pause() {
            self.event_tx
                .send(TimerEvent::Paused)
                .context("Failed to send paused event")?;
        }

        Ok(())
    }

    /// Resumes the session. Breathing restarts from phase 0; meditation
    /// continues from the preserved remaining value. Calling resume on a
    /// running session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if no session has been configured.
    pub fn resume(&mut self) -> Result<()> {
        if self.state.mode.is_none() {
            anyhow::bail!("No active session");
        }

        if self.state.resume() {
            self.event_tx
                .send(TimerEvent::Resumed)
                .context("Failed to send resumed event")?;
        }

        Ok(())
    }

    /// Stops the session. The last-displayed phase label and remaining time
    /// stay visible. Calling stop on a halted session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if no session has been configured.
    pub fn stop(&mut self) -> Result<()> {
        if self.state.mode.is_none() {
            anyhow::bail!("No active session");
        }

        if self.state.pause() {
            self.event_tx
                .send(TimerEvent::Stopped)
                .context("Failed to send stopped event")?;
        }

        Ok(())
    }

    /// Returns a reference to the current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns a mutable reference to the session state (for testing).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
