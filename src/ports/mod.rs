//! Ports - Interfaces between the application core and the outside world.
//!
//! Adapters in `crate::adapters` implement these traits.

mod assessment_repository;

pub use assessment_repository::AssessmentRepository;
