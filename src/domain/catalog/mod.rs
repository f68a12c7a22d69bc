//! Catalog Module - Static question configuration consumed by the engine.
//!
//! # Components
//!
//! - `Axis` - The eight maturity categories
//! - `Role` - Respondent roles
//! - `Question` / `QuestionOption` / `QuestionKind` - Question definitions
//! - `NumericSignalKey` - Operational metrics measured by numeric questions
//! - `QuestionCatalog` - Ordered collection with id lookup

mod axis;
mod errors;
mod question;
mod question_catalog;
mod role;

pub use axis::Axis;
pub use errors::CatalogError;
pub use question::{NumericSignalKey, Question, QuestionKind, QuestionOption};
pub use question_catalog::QuestionCatalog;
pub use role::Role;
