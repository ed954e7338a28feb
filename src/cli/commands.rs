//! Command definitions for the wellness timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Wellness timer CLI - guided breathing and meditation in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "mindful",
    version,
    about = "Guided breathing and meditation timer for the terminal",
    long_about = "A small wellness timer that runs in your terminal.\n\
                  Practice calming breathing techniques or run a meditation\n\
                  countdown, driven by a background daemon.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Daemon socket path (defaults to ~/.mindful/mindful.sock)
    #[arg(long, global = true, value_name = "PATH")]
    pub socket: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start a guided breathing session
    Breathe(BreatheArgs),

    /// Start a meditation countdown
    Meditate(MeditateArgs),

    /// Switch the breathing technique (restarts from the first phase)
    Technique {
        /// Technique id (unrecognized ids fall back to 4-7-8)
        #[arg(value_parser = validate_technique_id)]
        technique: String,
    },

    /// Change the meditation duration (resets remaining time)
    Duration {
        /// New duration in minutes (1-180)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=180))]
        minutes: u32,
    },

    /// Pause the current session
    Pause,

    /// Resume a paused session
    Resume,

    /// Stop the current session
    Stop,

    /// Show current session status
    Status,

    /// List available breathing techniques
    Techniques,

    /// Run the timer daemon (background service)
    Daemon,

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Breathe Command Arguments
// ============================================================================

/// Arguments for the breathe command
#[derive(Args, Debug, Clone, Default)]
pub struct BreatheArgs {
    /// Technique id: 4-7-8, box or nostril (unrecognized ids fall back to 4-7-8)
    #[arg(short, long, value_parser = validate_technique_id)]
    pub technique: Option<String>,
}

// ============================================================================
// Meditate Command Arguments
// ============================================================================

/// Arguments for the meditate command
#[derive(Args, Debug, Clone)]
pub struct MeditateArgs {
    /// Countdown length in minutes (1-180)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=180)
    )]
    pub duration: u32,
}

impl Default for MeditateArgs {
    fn default() -> Self {
        Self { duration: 5 }
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates a technique id argument.
///
/// - Must not be empty
/// - Must not exceed 32 characters
///
/// Unknown ids are accepted; the daemon resolves them with the documented
/// 4-7-8 fallback.
fn validate_technique_id(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Technique id cannot be empty".to_string());
    }
    if s.len() > 32 {
        return Err("Technique id must be at most 32 characters".to_string());
    }
    Ok(s.to_string())
}

// ============================================================================
// Tests
// ============================================================================
