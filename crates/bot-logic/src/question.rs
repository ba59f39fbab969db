//! Challenge question and answer types
//!
//! Boundary types shared with the match store. Answer values are a tagged
//! union resolved once against the question kind: choice questions carry the
//! option text, everything else a stringified index.

use serde::{Deserialize, Serialize};

/// Question kind discriminator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Mcq,
    FillBlank,
    TrueFalse,
}

/// One question from a challenge's question set
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl GameQuestion {
    /// Position of the correct answer within the options, if present
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o == &self.correct_answer)
    }

    /// Translate a selected index into the answer representation the match
    /// store expects: option text for choice questions, stringified index
    /// otherwise (or when the index is out of range).
    pub fn answer_for_index(&self, index: usize) -> Answer {
        match self.kind {
            QuestionKind::Mcq if index < self.options.len() => {
                Answer::Choice(self.options[index].clone())
            }
            _ => Answer::Index(index),
        }
    }
}

/// A submitted answer value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// The chosen option's text (choice-type questions)
    Choice(String),
    /// A raw option index (everything else)
    Index(usize),
}

impl Answer {
    /// Wire representation of the answer value
    pub fn value(&self) -> String {
        match self {
            Answer::Choice(text) => text.clone(),
            Answer::Index(index) => index.to_string(),
        }
    }
}

/// One answered question, as submitted to the match store
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    pub answer: Answer,
    pub is_correct: bool,
    #[serde(rename = "timeSpent")]
    pub time_spent_ms: u64,
    pub points: u32,
}
