//! Assessment command and query handlers.

mod analyze_assessment;
mod create_assessment;
mod export_analysis;
mod record_answers;

pub use analyze_assessment::{AnalyzeAssessmentHandler, AnalyzeAssessmentQuery};
pub use create_assessment::{
    CreateAssessmentCommand, CreateAssessmentHandler, CreateAssessmentResult,
};
pub use export_analysis::{
    ExportAnalysisCommand, ExportAnalysisHandler, ExportAnalysisResult, ExportFormat,
};
pub use record_answers::{RecordAnswersCommand, RecordAnswersHandler, RecordAnswersResult};
