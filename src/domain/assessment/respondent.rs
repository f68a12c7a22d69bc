//! Respondent entity - one interviewee answering for one role.

use serde::{Deserialize, Serialize};

use super::Answer;
use crate::domain::catalog::Role;
use crate::domain::foundation::{RespondentId, Timestamp};

/// A person answering the questionnaire for a role.
///
/// Holds at most one answer per question id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Respondent {
    pub id: RespondentId,
    pub role: Role,
    pub name: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl Respondent {
    /// Creates a respondent with no answers.
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            id: RespondentId::new(),
            role,
            name: name.into(),
            answers: Vec::new(),
            completed_at: None,
        }
    }

    /// Records an answer, replacing any previous answer to the same question.
    pub fn record(&mut self, answer: Answer) {
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == answer.question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }

    /// Marks a question as skipped.
    pub fn skip(&mut self, question_id: impl Into<String>) {
        self.record(Answer::skipped(question_id));
    }

    /// Finds the answer to a question.
    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    /// Marks the interview as finished.
    pub fn complete(&mut self) {
        self.completed_at = Some(Timestamp::now());
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}
