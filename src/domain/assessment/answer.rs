//! Answer value objects.

use serde::{Deserialize, Serialize};

/// Raw answer payload.
///
/// A `Text` value is a choice token for choice questions and free text
/// otherwise; interpretation depends on the question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    List(Vec<String>),
    Text(String),
}

impl AnswerValue {
    /// Returns the number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the token or text, if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the token list, if this is a multi-choice value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnswerValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A respondent's answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub value: Option<AnswerValue>,
    /// A skipped answer never contributes to scoring, whatever `value` holds.
    #[serde(default)]
    pub skipped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_ref: Option<String>,
}

impl Answer {
    fn with_value(question_id: impl Into<String>, value: Option<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            skipped: false,
            evidence_note: None,
            evidence_ref: None,
        }
    }

    /// Answer to a single-choice question.
    pub fn choice(question_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_value(question_id, Some(AnswerValue::Text(token.into())))
    }

    /// Answer to a multi-choice question.
    pub fn multi<I, S>(question_id: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter().map(Into::into).collect();
        Self::with_value(question_id, Some(AnswerValue::List(tokens)))
    }

    /// Answer to a numeric question.
    pub fn number(question_id: impl Into<String>, value: f64) -> Self {
        Self::with_value(question_id, Some(AnswerValue::Number(value)))
    }

    /// Free-text answer.
    pub fn text(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_value(question_id, Some(AnswerValue::Text(text.into())))
    }

    /// A question the respondent chose not to answer.
    pub fn skipped(question_id: impl Into<String>) -> Self {
        Self {
            skipped: true,
            ..Self::with_value(question_id, None)
        }
    }

    /// Attaches supporting evidence.
    pub fn with_evidence(mut self, note: impl Into<String>, reference: Option<String>) -> Self {
        self.evidence_note = Some(note.into());
        self.evidence_ref = reference;
        self
    }

    /// The value, unless the answer is skipped.
    pub fn effective_value(&self) -> Option<&AnswerValue> {
        if self.skipped {
            None
        } else {
            self.value.as_ref()
        }
    }
}
