//! Breathing technique catalog.
//!
//! Techniques are static configuration: each one is an ordered, non-empty
//! list of named phases with fixed durations. They are resolved by wire id
//! and never mutated at runtime.

use serde::{Deserialize, Serialize};

// ============================================================================
// Phase
// ============================================================================

/// One named, timed step within a breathing technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Display label (e.g. "Inhale", "Hold")
    pub label: &'static str,
    /// Phase duration in milliseconds
    pub duration_ms: u64,
}

const FOUR_SEVEN_EIGHT_PHASES: &[Phase] = &[
    Phase { label: "Inhale", duration_ms: 4000 },
    Phase { label: "Hold", duration_ms: 7000 },
    Phase { label: "Exhale", duration_ms: 8000 },
];

const BOX_PHASES: &[Phase] = &[
    Phase { label: "Inhale", duration_ms: 4000 },
    Phase { label: "Hold", duration_ms: 4000 },
    Phase { label: "Exhale", duration_ms: 4000 },
    Phase { label: "Hold", duration_ms: 4000 },
];

const NOSTRIL_PHASES: &[Phase] = &[
    Phase { label: "Inhale Left", duration_ms: 4000 },
    Phase { label: "Hold", duration_ms: 4000 },
    Phase { label: "Exhale Right", duration_ms: 4000 },
];

// ============================================================================
// Technique
// ============================================================================

/// A named breathing technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Technique {
    /// 4-7-8 breathing: inhale 4s, hold 7s, exhale 8s
    #[default]
    #[serde(rename = "4-7-8")]
    FourSevenEight,
    /// Box breathing: four equal 4s counts
    #[serde(rename = "box")]
    Box,
    /// Alternate nostril breathing
    #[serde(rename = "nostril")]
    AlternateNostril,
}

impl Technique {
    /// All techniques in the catalog, in display order.
    pub const ALL: [Technique; 3] = [
        Technique::FourSevenEight,
        Technique::Box,
        Technique::AlternateNostril,
    ];

    /// Returns the wire id of the technique.
    pub fn id(&self) -> &'static str {
        match self {
            Technique::FourSevenEight => "4-7-8",
            Technique::Box => "box",
            Technique::AlternateNostril => "nostril",
        }
    }

    /// Returns the human-readable name of the technique.
    pub fn display_name(&self) -> &'static str {
        match self {
            Technique::FourSevenEight => "4-7-8 Breathing",
            Technique::Box => "Box Breathing",
            Technique::AlternateNostril => "Alternate Nostril",
        }
    }

    /// Returns a one-line description of the technique.
    pub fn description(&self) -> &'static str {
        match self {
            Technique::FourSevenEight => "Inhale for 4, hold for 7, exhale for 8",
            Technique::Box => "Inhale, hold, exhale, hold for 4 counts each",
            Technique::AlternateNostril => "Alternate breathing between nostrils",
        }
    }

    /// Returns the ordered, non-empty phase list.
    pub fn phases(&self) -> &'static [Phase] {
        match self {
            Technique::FourSevenEight => FOUR_SEVEN_EIGHT_PHASES,
            Technique::Box => BOX_PHASES,
            Technique::AlternateNostril => NOSTRIL_PHASES,
        }
    }

    /// Looks up a technique by wire id.
    pub fn from_id(id: &str) -> Option<Technique> {
        Technique::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Resolves a technique id, falling back to 4-7-8 for unrecognized ids.
    ///
    /// The fallback is documented behavior, not an error: an unknown id
    /// behaves exactly like `"4-7-8"`.
    pub fn resolve(id: &str) -> Technique {
        Technique::from_id(id).unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
