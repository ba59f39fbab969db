//! Per-question answer decisions
//!
//! Given an option count, the correct index, and an operating profile, the
//! bot decides which option to pick and how long to "think". Selection is
//! probability-driven; correctness is always derived from the comparison
//! with the correct index, never set independently.

use thiserror::Error;

use crate::difficulty::OperatingProfile;
use crate::random::SeededRng;

/// Bounds for mid-session accuracy re-tuning
const MIN_TUNED_ACCURACY: f64 = 0.30;
const MAX_TUNED_ACCURACY: f64 = 0.95;

/// A question the bot cannot answer — input contract violation
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("question has {count} option(s); at least 2 are required")]
    TooFewOptions { count: usize },

    #[error("correct index {index} out of bounds for {count} options")]
    CorrectIndexOutOfBounds { index: usize, count: usize },
}

/// Outcome of one answer decision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub selected_index: usize,
    pub is_correct: bool,
}

/// The bot's answering engine for one match
#[derive(Clone, Debug)]
pub struct BotAi {
    accuracy: f64,
    response_time_ms: (u64, u64),
    rng: SeededRng,
}

impl BotAi {
    /// Create an engine from an operating profile
    pub fn new(profile: &OperatingProfile, rng: SeededRng) -> Self {
        Self {
            accuracy: profile.accuracy,
            response_time_ms: profile.response_time_ms,
            rng,
        }
    }

    /// Current target accuracy
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Inclusive think-time bounds in milliseconds
    pub fn response_time_ms(&self) -> (u64, u64) {
        self.response_time_ms
    }

    /// Re-tune accuracy between questions, clamped to [0.30, 0.95]
    pub fn set_accuracy(&mut self, accuracy: f64) {
        self.accuracy = accuracy.clamp(MIN_TUNED_ACCURACY, MAX_TUNED_ACCURACY);
    }

    /// Check a question's inputs without consuming randomness
    ///
    /// Callers run this before scheduling any think-time delay so malformed
    /// questions fail fast.
    pub fn validate(option_count: usize, correct_index: usize) -> Result<(), DecisionError> {
        if option_count < 2 {
            return Err(DecisionError::TooFewOptions { count: option_count });
        }
        if correct_index >= option_count {
            return Err(DecisionError::CorrectIndexOutOfBounds {
                index: correct_index,
                count: option_count,
            });
        }
        Ok(())
    }

    /// Draw a simulated think time, uniform over the inclusive range
    pub fn draw_think_time_ms(&mut self) -> u64 {
        let (min, max) = self.response_time_ms;
        self.rng.range_inclusive(min, max)
    }

    /// Decide which option to select
    ///
    /// With probability `accuracy` the correct index is chosen; otherwise a
    /// uniform draw over the remaining indices — the correct one is never
    /// picked by the miss path.
    pub fn select(
        &mut self,
        option_count: usize,
        correct_index: usize,
    ) -> Result<Selection, DecisionError> {
        Self::validate(option_count, correct_index)?;

        let selected_index = if self.rng.next_f64() < self.accuracy {
            correct_index
        } else {
            self.rng.pick_other(option_count, correct_index)
        };

        Ok(Selection {
            selected_index,
            is_correct: selected_index == correct_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_ai(accuracy: f64) -> BotAi {
        let profile = OperatingProfile {
            accuracy,
            response_time_ms: (2000, 4000),
        };
        BotAi::new(&profile, SeededRng::new(42))
    }

    #[test]
    fn test_perfect_accuracy_always_correct() {
        let mut ai = make_ai(1.0);

        for _ in 0..500 {
            let sel = ai.select(4, 2).unwrap();
            assert_eq!(sel.selected_index, 2);
            assert!(sel.is_correct);
        }
    }

    #[test]
    fn test_zero_accuracy_never_correct() {
        let mut ai = make_ai(0.0);

        for _ in 0..500 {
            let sel = ai.select(4, 2).unwrap();
            assert_ne!(sel.selected_index, 2);
            assert!(!sel.is_correct);
        }
    }

    #[test]
    fn test_wrong_answers_uniform() {
        let mut ai = make_ai(0.0);
        let trials = 6000;
        let mut counts = [0u32; 4];

        for _ in 0..trials {
            counts[ai.select(4, 2).unwrap().selected_index] += 1;
        }

        assert_eq!(counts[2], 0);
        // Expected ~2000 per wrong option
        for (i, count) in counts.iter().enumerate() {
            if i == 2 {
                continue;
            }
            assert!(
                (1800..2200).contains(count),
                "option {} drawn {} times, expected ~2000",
                i,
                count
            );
        }
    }

    #[test]
    fn test_accuracy_hit_rate() {
        let mut ai = make_ai(0.7);
        let trials = 10_000;
        let mut correct = 0u32;

        for _ in 0..trials {
            if ai.select(4, 1).unwrap().is_correct {
                correct += 1;
            }
        }

        let rate = correct as f64 / trials as f64;
        assert!(rate > 0.67 && rate < 0.73, "hit rate {} not ~0.70", rate);
    }

    #[test]
    fn test_correctness_coupling() {
        let mut ai = make_ai(0.5);

        for _ in 0..1000 {
            let sel = ai.select(4, 3).unwrap();
            assert_eq!(sel.is_correct, sel.selected_index == 3);
        }
    }

    #[test]
    fn test_two_option_miss_picks_the_other() {
        let mut ai = make_ai(0.0);

        for correct in 0..2 {
            let sel = ai.select(2, correct).unwrap();
            assert_eq!(sel.selected_index, 1 - correct);
        }
    }

    #[test]
    fn test_think_time_within_bounds() {
        let profile = OperatingProfile {
            accuracy: 0.7,
            response_time_ms: (10, 13),
        };
        let mut ai = BotAi::new(&profile, SeededRng::new(7));
        let mut saw_min = false;
        let mut saw_max = false;

        for _ in 0..2000 {
            let t = ai.draw_think_time_ms();
            assert!((10..=13).contains(&t), "think time {} out of bounds", t);
            saw_min |= t == 10;
            saw_max |= t == 13;
        }

        assert!(saw_min && saw_max, "inclusive bounds never drawn");
    }

    #[test]
    fn test_fixed_range_think_time() {
        let profile = OperatingProfile {
            accuracy: 0.7,
            response_time_ms: (2000, 2000),
        };
        let mut ai = BotAi::new(&profile, SeededRng::new(7));
        assert_eq!(ai.draw_think_time_ms(), 2000);
    }

    #[test]
    fn test_too_few_options() {
        let mut ai = make_ai(0.7);
        assert_eq!(ai.select(0, 0), Err(DecisionError::TooFewOptions { count: 0 }));
        assert_eq!(ai.select(1, 0), Err(DecisionError::TooFewOptions { count: 1 }));
    }

    #[test]
    fn test_correct_index_out_of_bounds() {
        let mut ai = make_ai(0.7);
        assert_eq!(
            ai.select(4, 4),
            Err(DecisionError::CorrectIndexOutOfBounds { index: 4, count: 4 })
        );
    }

    #[test]
    fn test_validate_matches_select() {
        assert!(BotAi::validate(2, 0).is_ok());
        assert!(BotAi::validate(2, 1).is_ok());
        assert!(BotAi::validate(1, 0).is_err());
        assert!(BotAi::validate(3, 3).is_err());
    }

    #[test]
    fn test_set_accuracy_clamps() {
        let mut ai = make_ai(0.7);

        ai.set_accuracy(0.1);
        assert_eq!(ai.accuracy(), 0.30);

        ai.set_accuracy(0.99);
        assert_eq!(ai.accuracy(), 0.95);

        ai.set_accuracy(0.6);
        assert_eq!(ai.accuracy(), 0.6);
    }

    proptest! {
        #[test]
        fn prop_selection_always_in_bounds(
            seed in any::<u64>(),
            accuracy in 0.0f64..=1.0,
            option_count in 2usize..8,
        ) {
            let profile = OperatingProfile { accuracy, response_time_ms: (100, 200) };
            let mut ai = BotAi::new(&profile, SeededRng::new(seed));
            let correct = option_count / 2;

            let sel = ai.select(option_count, correct).unwrap();
            prop_assert!(sel.selected_index < option_count);
            prop_assert_eq!(sel.is_correct, sel.selected_index == correct);
        }
    }
}
