//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentId, RespondentId};
pub use score::OptionScore;
pub use timestamp::Timestamp;
