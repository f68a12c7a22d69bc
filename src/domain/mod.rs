//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, scores, errors)
//! - `catalog` - Question catalog, axes and roles
//! - `assessment` - Assessment aggregate, respondents and answers
//! - `analysis` - Pure domain services turning answers into findings

pub mod analysis;
pub mod assessment;
pub mod catalog;
pub mod foundation;
