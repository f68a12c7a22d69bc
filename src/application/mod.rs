//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands change a stored assessment; queries only read it.

pub mod handlers;

pub use handlers::{
    AnalyzeAssessmentHandler, AnalyzeAssessmentQuery, CreateAssessmentCommand,
    CreateAssessmentHandler, CreateAssessmentResult, ExportAnalysisCommand,
    ExportAnalysisHandler, ExportAnalysisResult, ExportFormat, RecordAnswersCommand,
    RecordAnswersHandler, RecordAnswersResult,
};
