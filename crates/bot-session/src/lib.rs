//! Bot Session for the Challenge Arena
//!
//! Drives the `bot-logic` decision core across a whole match: one answer
//! session per challenge, strictly sequential question processing with
//! cooperative (non-blocking) think-time delays, and an exactly-once
//! submission to the match store.

mod sink;
mod session;

pub use sink::{MatchSink, SubmitError};
pub use session::{
    bot_session_for_challenge, BotSession, SessionError, SessionReport, DEFAULT_START_DELAY_MS,
};
