//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AnalyzeAssessmentHandler, AnalyzeAssessmentQuery, CreateAssessmentCommand,
    CreateAssessmentHandler, CreateAssessmentResult, ExportAnalysisCommand,
    ExportAnalysisHandler, ExportAnalysisResult, ExportFormat, RecordAnswersCommand,
    RecordAnswersHandler, RecordAnswersResult,
};
