//! Bot Logic for the Challenge Arena
//!
//! Pure decision core for the simulated study-partner opponent ("Sarah").
//! This crate is fully synchronous and deterministic given a seed:
//! - Difficulty adaptation (opponent level/XP/win-rate → operating profile)
//! - Per-question answer selection and think-time draws
//!
//! Asynchronous session orchestration lives in the `bot-session` crate.

mod random;
mod profile;
mod difficulty;
mod question;
mod decision;

pub use random::SeededRng;
pub use profile::{all_bots, bot_by_id, is_bot, sarah_bot, BotProfile, DifficultyLevel};
pub use difficulty::{adapt_difficulty, DifficultyTuning, OperatingProfile};
pub use question::{Answer, AnswerRecord, GameQuestion, QuestionKind};
pub use decision::{BotAi, DecisionError, Selection};
