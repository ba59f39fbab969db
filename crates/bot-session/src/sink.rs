//! Match-persistence boundary
//!
//! The session never talks to storage directly; it hands the finished
//! answer set to a `MatchSink` exactly once. The real implementation lives
//! with the match store; tests use in-memory recorders.

use bot_logic::AnswerRecord;
use thiserror::Error;

/// Failure reported by the match store
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("match store rejected submission: {0}")]
pub struct SubmitError(pub String);

/// Destination for a completed answer session
#[allow(async_fn_in_trait)]
pub trait MatchSink {
    /// Persist the bot's full answer set for one challenge
    ///
    /// Called at most once per session instance.
    async fn submit(
        &self,
        challenge_id: &str,
        user_id: &str,
        answers: &[AnswerRecord],
        total_time_ms: u64,
    ) -> Result<(), SubmitError>;
}
