//! Difficulty adaptation
//!
//! Maps the human opponent's level, XP, and recent win rate to the bot's
//! operating parameters for one match. Pure and deterministic: the same
//! inputs always produce the same profile. Adjustments apply to the next
//! match, never retroactively — a profile is fixed once derived.

use serde::{Deserialize, Serialize};

/// Immutable per-match bot configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperatingProfile {
    /// Probability in [0, 1] of selecting the correct option
    pub accuracy: f64,
    /// Inclusive (min, max) simulated think time in milliseconds
    pub response_time_ms: (u64, u64),
}

/// Product-tuning constants for difficulty adaptation
///
/// These are balance knobs, not contracts. `Default` carries the values the
/// arena shipped with.
#[derive(Clone, Copy, Debug)]
pub struct DifficultyTuning {
    /// Below this XP the bot eases off
    pub low_xp: u32,
    /// Above this XP the bot sharpens up
    pub high_xp: u32,
    /// Accuracy delta applied at the XP thresholds
    pub xp_delta: f64,
    /// Below this win rate the opponent is struggling
    pub low_win_rate: f64,
    /// Above this win rate the opponent is dominating
    pub high_win_rate: f64,
    /// Accuracy delta applied at the win-rate thresholds
    pub win_rate_delta: f64,
    /// Final accuracy floor — the bot is never trivially beatable
    pub min_accuracy: f64,
    /// Final accuracy ceiling — the bot is never unbeatable
    pub max_accuracy: f64,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            low_xp: 500,
            high_xp: 3000,
            xp_delta: 0.05,
            low_win_rate: 0.3,
            high_win_rate: 0.7,
            win_rate_delta: 0.10,
            min_accuracy: 0.5,
            max_accuracy: 0.9,
        }
    }
}

/// Compute the bot's operating profile for one match
///
/// # Arguments
/// * `level` - Opponent's level label (e.g. "JHS 1", "SHS 2 Science")
/// * `xp` - Opponent's accumulated experience score
/// * `recent_win_rate` - Opponent's recent win fraction in [0, 1], if known
/// * `tuning` - Threshold and delta configuration
///
/// Tier bands are matched by substring, lowest first; an unrecognized label
/// falls back to the JHS 3 band. XP and win-rate thresholds use strict
/// inequalities, so a score exactly at a threshold gets no adjustment.
pub fn adapt_difficulty(
    level: &str,
    xp: u32,
    recent_win_rate: Option<f64>,
    tuning: &DifficultyTuning,
) -> OperatingProfile {
    // Base band by level: higher tiers face a sharper, faster bot
    let (mut accuracy, response_time_ms) = if level.contains("JHS 1") {
        (0.60, (3000, 5000))
    } else if level.contains("JHS 2") {
        (0.65, (2500, 4500))
    } else if level.contains("JHS 3") {
        (0.70, (2000, 4000))
    } else if level.contains("SHS") {
        (0.75, (1500, 3500))
    } else {
        (0.70, (2000, 4000))
    };

    // XP adjustment: easier for newcomers, harder for veterans
    if xp < tuning.low_xp {
        accuracy -= tuning.xp_delta;
    } else if xp > tuning.high_xp {
        accuracy += tuning.xp_delta;
    }

    // Win-rate adjustment: back off when the opponent is losing
    if let Some(win_rate) = recent_win_rate {
        if win_rate < tuning.low_win_rate {
            accuracy -= tuning.win_rate_delta;
        } else if win_rate > tuning.high_win_rate {
            accuracy += tuning.win_rate_delta;
        }
    }

    // Accuracies are two-decimal product values; round before clamping
    accuracy = (accuracy * 100.0).round() / 100.0;

    OperatingProfile {
        accuracy: accuracy.clamp(tuning.min_accuracy, tuning.max_accuracy),
        response_time_ms,
    }
}
