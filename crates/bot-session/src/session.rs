//! Answer-session orchestration
//!
//! One `BotSession` per match. The session walks the question list in
//! order, sleeping through each simulated think time, and submits the
//! aggregated answers exactly once. Everything runs on the caller's
//! cooperative thread; dropping the in-flight future cancels the pending
//! delay and suppresses submission entirely.

use std::cell::{Cell, RefCell};

use log::{info, warn};
use tokio::time::{sleep, Duration};

use bot_logic::{
    adapt_difficulty, is_bot, AnswerRecord, BotAi, DecisionError, DifficultyTuning, GameQuestion,
    SeededRng,
};

use crate::sink::{MatchSink, SubmitError};

/// Warm-up pause before the bot starts answering, in milliseconds
pub const DEFAULT_START_DELAY_MS: u64 = 1000;

/// Why a session could not run to completion
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("opponent {0} is not a bot")]
    OpponentNotBot(String),

    #[error("bot answer session already in progress")]
    AlreadyAnswering,

    #[error("bot answers already submitted for this session")]
    AlreadySubmitted,

    #[error("challenge has no questions")]
    NoQuestions,

    #[error("correct answer for question {question_id} not found among its options")]
    UnknownCorrectAnswer { question_id: String },

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Aggregated outcome of a completed session
#[derive(Clone, Debug, serde::Serialize)]
pub struct SessionReport {
    pub answers: Vec<AnswerRecord>,
    pub total_time_ms: u64,
    pub score: u32,
    pub correct_count: u32,
}

/// One bot answer session, owned by its match
///
/// Flags use `Cell` rather than locks: the session shares a single
/// cooperative thread with the human player's own interaction handling, so
/// the guards only need to survive suspension points, not parallelism.
pub struct BotSession {
    challenge_id: String,
    bot_user_id: String,
    questions: Vec<GameQuestion>,
    ai: RefCell<BotAi>,
    start_delay_ms: u64,
    answering: Cell<bool>,
    submitted: Cell<bool>,
}

/// Releases the `answering` flag when the session future completes or is
/// dropped mid-suspension.
struct AnsweringGuard<'a>(&'a Cell<bool>);

impl Drop for AnsweringGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl BotSession {
    /// Create a session for one match
    pub fn new(
        challenge_id: impl Into<String>,
        bot_user_id: impl Into<String>,
        questions: Vec<GameQuestion>,
        ai: BotAi,
    ) -> Self {
        Self {
            challenge_id: challenge_id.into(),
            bot_user_id: bot_user_id.into(),
            questions,
            ai: RefCell::new(ai),
            start_delay_ms: DEFAULT_START_DELAY_MS,
            answering: Cell::new(false),
            submitted: Cell::new(false),
        }
    }

    /// Override the warm-up pause before the first question
    pub fn with_start_delay_ms(mut self, delay_ms: u64) -> Self {
        self.start_delay_ms = delay_ms;
        self
    }

    /// True while the session is producing answers
    pub fn is_answering(&self) -> bool {
        self.answering.get()
    }

    /// True once the answer set has been handed to the match store
    pub fn is_submitted(&self) -> bool {
        self.submitted.get()
    }

    /// Run the full answer session and submit the result
    ///
    /// Strictly sequential: one question at a time, in list order, with a
    /// cooperative sleep for each think time. Re-entrant starts and starts
    /// after a successful submission are rejected by the guard flags. If
    /// the returned future is dropped mid-flight, the pending delay is
    /// cancelled and nothing is submitted.
    pub async fn start<S: MatchSink>(&self, sink: &S) -> Result<SessionReport, SessionError> {
        if !is_bot(&self.bot_user_id) {
            return Err(SessionError::OpponentNotBot(self.bot_user_id.clone()));
        }
        if self.answering.get() {
            return Err(SessionError::AlreadyAnswering);
        }
        if self.submitted.get() {
            return Err(SessionError::AlreadySubmitted);
        }
        if self.questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        self.answering.set(true);
        let guard = AnsweringGuard(&self.answering);

        if self.start_delay_ms > 0 {
            sleep(Duration::from_millis(self.start_delay_ms)).await;
        }

        let mut answers: Vec<AnswerRecord> = Vec::with_capacity(self.questions.len());
        let mut total_time_ms = 0u64;

        for question in &self.questions {
            let option_count = question.options.len();
            let correct_index =
                question
                    .correct_index()
                    .ok_or_else(|| SessionError::UnknownCorrectAnswer {
                        question_id: question.id.clone(),
                    })?;

            // Malformed questions fail before any think time is scheduled
            BotAi::validate(option_count, correct_index)?;

            let think_ms = self.ai.borrow_mut().draw_think_time_ms();
            sleep(Duration::from_millis(think_ms)).await;

            let selection = self.ai.borrow_mut().select(option_count, correct_index)?;
            total_time_ms += think_ms;
            answers.push(AnswerRecord {
                question_id: question.id.clone(),
                answer: question.answer_for_index(selection.selected_index),
                is_correct: selection.is_correct,
                time_spent_ms: think_ms,
                points: if selection.is_correct { question.points } else { 0 },
            });
        }

        let score: u32 = answers.iter().map(|a| a.points).sum();
        let correct_count = answers.iter().filter(|a| a.is_correct).count() as u32;

        match sink
            .submit(&self.challenge_id, &self.bot_user_id, &answers, total_time_ms)
            .await
        {
            Ok(()) => {
                self.submitted.set(true);
                drop(guard);
                info!(
                    "[bot {}] submitted {} answers for challenge {} ({} pts, {} ms)",
                    self.bot_user_id,
                    answers.len(),
                    self.challenge_id,
                    score,
                    total_time_ms
                );
                Ok(SessionReport {
                    answers,
                    total_time_ms,
                    score,
                    correct_count,
                })
            }
            Err(err) => {
                warn!(
                    "[bot {}] failed to submit answers for challenge {}: {}",
                    self.bot_user_id, self.challenge_id, err
                );
                // Guard drop releases `answering` so a later trigger can retry;
                // `submitted` stays false.
                drop(guard);
                Err(SessionError::Submit(err))
            }
        }
    }

    /// Explicit retry entry point after a submission failure
    ///
    /// Same guard semantics as `start`: rejected while a session is in
    /// progress or after a successful submission.
    pub async fn retry<S: MatchSink>(&self, sink: &S) -> Result<SessionReport, SessionError> {
        self.start(sink).await
    }
}

/// Wire up a session for a challenge against a possibly-bot opponent
///
/// Returns `None` when the opponent is human. Difficulty is adapted once
/// from the challenger's level, XP, and recent win rate; the resulting
/// profile is fixed for the whole match.
pub fn bot_session_for_challenge(
    challenge_id: &str,
    opponent_user_id: &str,
    questions: Vec<GameQuestion>,
    challenger_level: &str,
    challenger_xp: u32,
    recent_win_rate: Option<f64>,
) -> Option<BotSession> {
    if !is_bot(opponent_user_id) {
        return None;
    }

    let profile = adapt_difficulty(
        challenger_level,
        challenger_xp,
        recent_win_rate,
        &DifficultyTuning::default(),
    );
    let ai = BotAi::new(&profile, SeededRng::from_entropy());

    Some(BotSession::new(
        challenge_id,
        opponent_user_id,
        questions,
        ai,
    ))
}
