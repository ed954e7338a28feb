//! Display utilities for the wellness timer CLI.
//!
//! This module provides formatted output for:
//! - Success messages
//! - Error messages
//! - Status display
//! - Remaining-time formatting

use crate::technique::Technique;
use crate::types::{IpcResponse, ResponseData};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows a success message for a started breathing session.
    pub fn show_breathe_success(response: &IpcResponse) {
        println!("* {}", response.message);

        if let Some(data) = &response.data {
            if let Some(phase) = &data.phase {
                println!("  Phase: {}", phase);
            }
        }
    }

    /// Shows a success message for a started meditation.
    pub fn show_meditate_success(response: &IpcResponse) {
        println!("* {}", response.message);
        Self::print_remaining(&response.data);
    }

    /// Shows a success message for a technique switch.
    pub fn show_technique_success(response: &IpcResponse) {
        println!("* {}", response.message);

        if let Some(data) = &response.data {
            if let Some(phase) = &data.phase {
                println!("  Phase: {}", phase);
            }
        }
    }

    /// Shows a success message for a duration change.
    pub fn show_duration_success(response: &IpcResponse) {
        println!("* {}", response.message);
        Self::print_remaining(&response.data);
    }

    /// Shows a success message for a pause.
    pub fn show_pause_success(response: &IpcResponse) {
        println!("|| Session paused");
        Self::print_remaining(&response.data);
    }

    /// Shows a success message for a resume.
    pub fn show_resume_success(response: &IpcResponse) {
        println!("> Session resumed");
        Self::print_remaining(&response.data);
    }

    /// Shows a success message for a stop.
    pub fn show_stop_success(_response: &IpcResponse) {
        println!("[] Session stopped");
    }

    /// Shows the current session status.
    pub fn show_status(response: &IpcResponse) {
        println!("Wellness Timer Status");
        println!("─────────────────────");

        let Some(data) = &response.data else {
            println!("The daemon is not reporting any state");
            return;
        };

        let state = data.state.as_deref().unwrap_or("unknown");
        let state_display = match state {
            "running" => "Running",
            "paused" => "Paused",
            "idle" => "Idle",
            _ => state,
        };
        println!("State: {}", state_display);

        match data.mode.as_deref() {
            Some("breathing") => {
                println!("Mode: Breathing");
                if let Some(id) = &data.technique {
                    let technique = Technique::resolve(id);
                    println!("Technique: {}", technique.display_name());
                }
                if let Some(phase) = &data.phase {
                    println!("Phase: {}", phase);
                }
            }
            Some("meditation") => {
                println!("Mode: Meditation");
                if let Some(remaining) = data.remaining_seconds {
                    println!("Remaining: {}", Self::format_clock(remaining));
                }
            }
            _ => {}
        }
    }

    /// Shows the technique catalog.
    pub fn show_techniques() {
        println!("Available breathing techniques");
        println!("──────────────────────────────");

        for technique in Technique::ALL {
            println!("{:<8} {}", technique.id(), technique.display_name());
            println!("{:<8} {}", "", technique.description());
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Prints the remaining-time line if the response carries one.
    fn print_remaining(data: &Option<ResponseData>) {
        if let Some(data) = data {
            if let Some(remaining) = data.remaining_seconds {
                println!("  Remaining: {}", Self::format_clock(remaining));
            }
        }
    }

    /// Formats remaining seconds as a zero-padded `MM:SS` clock.
    pub fn format_clock(total_seconds: u32) -> String {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Format Clock Tests
    // ------------------------------------------------------------------------

    mod format_clock_tests {
        use super::*;

        #[test]
        fn test_format_clock_zero() {
            assert_eq!(Display::format_clock(0), "00:00");
        }

        #[test]
        fn test_format_clock_seconds_only() {
            assert_eq!(Display::format_clock(45), "00:45");
        }

        #[test]
        fn test_format_clock_five_minutes() {
            assert_eq!(Display::format_clock(300), "05:00");
        }

        #[test]
        fn test_format_clock_mixed() {
            assert_eq!(Display::format_clock(309), "05:09");
        }

        #[test]
        fn test_format_clock_pads_both_fields() {
            assert_eq!(Display::format_clock(61), "01:01");
            assert_eq!(Display::format_clock(9), "00:09");
        }

        #[test]
        fn test_format_clock_large_values() {
            assert_eq!(Display::format_clock(180 * 60), "180:00");
        }
    }
}
