//! ExportAnalysisHandler - Serializes an analysis for manual export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::analyze_assessment::{AnalyzeAssessmentHandler, AnalyzeAssessmentQuery};
use crate::domain::foundation::{AssessmentId, DomainError, ValidationError};

/// Text exchange format for exported results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(ValidationError::invalid_format(
                "format",
                format!("unsupported export format '{}'", other),
            )),
        }
    }
}

/// Command to export the analysis of an assessment.
#[derive(Debug, Clone)]
pub struct ExportAnalysisCommand {
    pub assessment_id: AssessmentId,
    pub format: ExportFormat,
}

/// Serialized analysis plus a suggested file name.
#[derive(Debug, Clone)]
pub struct ExportAnalysisResult {
    pub file_name: String,
    pub format: ExportFormat,
    pub content: String,
}

/// Handler that analyzes and serializes in one step.
pub struct ExportAnalysisHandler {
    analyzer: AnalyzeAssessmentHandler,
}

impl ExportAnalysisHandler {
    pub fn new(analyzer: AnalyzeAssessmentHandler) -> Self {
        Self { analyzer }
    }

    pub async fn handle(&self, cmd: ExportAnalysisCommand) -> Result<ExportAnalysisResult, DomainError> {
        let result = self
            .analyzer
            .handle(AnalyzeAssessmentQuery {
                assessment_id: cmd.assessment_id,
            })
            .await?;

        let content = match cmd.format {
            ExportFormat::Json => result.to_json_pretty()?,
            ExportFormat::Yaml => result.to_yaml()?,
        };

        info!(
            assessment_id = %cmd.assessment_id,
            format = %cmd.format,
            bytes = content.len(),
            "analysis exported"
        );

        Ok(ExportAnalysisResult {
            file_name: format!("analysis-{}.{}", cmd.assessment_id, cmd.format.extension()),
            format: cmd.format,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentRepository;
    use crate::domain::analysis::AnalysisResult;
    use crate::domain::assessment::demo_assessment;
    use crate::domain::catalog::QuestionCatalog;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::AssessmentRepository;
    use std::sync::Arc;

    async fn exporter() -> (ExportAnalysisHandler, AssessmentId) {
        let catalog = Arc::new(QuestionCatalog::builtin().unwrap().clone());
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let assessment = demo_assessment(&catalog);
        repo.put(&assessment).await.unwrap();

        let analyzer = AnalyzeAssessmentHandler::new(repo, catalog);
        (ExportAnalysisHandler::new(analyzer), assessment.id)
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[tokio::test]
    async fn json_export_parses_back() {
        let (handler, id) = exporter().await;

        let export = handler
            .handle(ExportAnalysisCommand {
                assessment_id: id,
                format: ExportFormat::Json,
            })
            .await
            .unwrap();

        assert_eq!(export.file_name, format!("analysis-{}.json", id));
        let parsed = AnalysisResult::from_json(&export.content).unwrap();
        assert_eq!(parsed.assessment_id, id);
        assert_eq!(parsed.backlog.len(), 8);
    }

    #[tokio::test]
    async fn yaml_export_keeps_bilingual_fields() {
        let (handler, id) = exporter().await;

        let export = handler
            .handle(ExportAnalysisCommand {
                assessment_id: id,
                format: ExportFormat::Yaml,
            })
            .await
            .unwrap();

        assert!(export.content.contains("title_en"));
        assert!(export.content.contains("title_ar"));
        assert!(export.content.contains("yearly_savings"));
    }

    #[tokio::test]
    async fn export_of_missing_assessment_fails() {
        let (handler, _) = exporter().await;

        let err = handler
            .handle(ExportAnalysisCommand {
                assessment_id: AssessmentId::new(),
                format: ExportFormat::Json,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
    }
}
