//! Assessment Module - The input aggregate the engine analyzes.
//!
//! An `Assessment` holds client metadata, ROI assumptions and one
//! `Respondent` per role, each with their `Answer`s.

mod aggregate;
mod answer;
mod demo;
mod respondent;
mod roi_settings;

pub use aggregate::{Assessment, AssessmentStatus, CompanySize};
pub use answer::{Answer, AnswerValue};
pub use demo::demo_assessment;
pub use respondent::Respondent;
pub use roi_settings::{Currency, RoiSettings};
