//! Storage Adapters
//!
//! Implementations of the AssessmentRepository port.
//!
//! ## Available Adapters
//!
//! - **FileAssessmentRepository** - One JSON document per assessment on disk
//! - **InMemoryAssessmentRepository** - Stores assessments in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileAssessmentRepository, InMemoryAssessmentRepository};
//!
//! // Production: file-based storage
//! let repo = FileAssessmentRepository::new("./data/assessments");
//!
//! // Testing: in-memory storage
//! let repo = InMemoryAssessmentRepository::new();
//! ```

mod file_assessment_repository;
mod in_memory_assessment_repository;

pub use file_assessment_repository::FileAssessmentRepository;
pub use in_memory_assessment_repository::InMemoryAssessmentRepository;
