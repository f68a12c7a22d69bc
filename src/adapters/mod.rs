//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Assessment persistence (in-memory, JSON files)

pub mod storage;

pub use storage::{FileAssessmentRepository, InMemoryAssessmentRepository};
