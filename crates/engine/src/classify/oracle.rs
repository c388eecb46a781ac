//! AI Classifier Adapter — consults an external language-model oracle for a
//! structured classification. Every failure mode maps to
//! `OracleUnavailable` so the orchestrator can fall back to keyword
//! scoring; the adapter never substitutes a wrong-but-well-formed result.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::RoleCatalog;
use crate::classify::prompts::{CLASSIFY_PROMPT_TEMPLATE, CLASSIFY_SYSTEM};
use crate::config::OracleConfig;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::{ClassificationResult, ClassificationSource};

/// Why the oracle could not produce a usable classification.
#[derive(Debug, Error)]
pub enum OracleUnavailable {
    #[error("oracle credentials are not configured")]
    MissingCredentials,

    #[error("oracle call exceeded the {0:?} timeout")]
    Timeout(Duration),

    #[error("oracle transport failure: {0}")]
    Transport(String),

    #[error("oracle returned a malformed payload: {0}")]
    Malformed(String),

    #[error("oracle returned unknown category id '{0}'")]
    UnknownCategory(String),
}

/// Seam for the external classification oracle. Swap implementations to
/// exercise orchestration without network access.
#[async_trait]
pub trait OracleClassifier: Send + Sync {
    async fn classify(
        &self,
        jd_text: &str,
        catalog: &RoleCatalog,
    ) -> Result<ClassificationResult, OracleUnavailable>;
}

/// Wire shape the oracle must return. Anything else is `Malformed`.
#[derive(Debug, Deserialize)]
struct OracleVerdict {
    category: String,
    confidence: f32,
    technologies: Vec<String>,
    reasoning: String,
}

/// Production oracle backed by the Anthropic Messages API.
pub struct AnthropicOracle {
    client: Option<LlmClient>,
    timeout: Duration,
}

impl AnthropicOracle {
    /// Builds the adapter from an explicit configuration struct. A missing
    /// API key leaves the adapter constructed but permanently unavailable.
    pub fn new(config: &OracleConfig) -> Self {
        let client = config
            .api_key
            .as_ref()
            .map(|key| LlmClient::new(key.clone(), config));
        Self {
            client,
            timeout: config.timeout,
        }
    }

    fn build_prompt(jd_text: &str, catalog: &RoleCatalog) -> String {
        CLASSIFY_PROMPT_TEMPLATE
            .replace("{category_ids}", &catalog.ids().join(", "))
            .replace("{jd_text}", jd_text)
    }
}

#[async_trait]
impl OracleClassifier for AnthropicOracle {
    async fn classify(
        &self,
        jd_text: &str,
        catalog: &RoleCatalog,
    ) -> Result<ClassificationResult, OracleUnavailable> {
        let client = self
            .client
            .as_ref()
            .ok_or(OracleUnavailable::MissingCredentials)?;

        let prompt = Self::build_prompt(jd_text, catalog);
        let verdict = tokio::time::timeout(
            self.timeout,
            client.call_json::<OracleVerdict>(&prompt, CLASSIFY_SYSTEM),
        )
        .await
        .map_err(|_| OracleUnavailable::Timeout(self.timeout))?
        .map_err(unavailable_from_llm)?;

        debug!(
            category = %verdict.category,
            confidence = verdict.confidence,
            "oracle verdict received"
        );
        verdict_into_result(verdict, catalog)
    }
}

fn unavailable_from_llm(err: LlmError) -> OracleUnavailable {
    match err {
        LlmError::Http(e) => OracleUnavailable::Transport(e.to_string()),
        LlmError::Api { status, message } => {
            OracleUnavailable::Transport(format!("status {status}: {message}"))
        }
        LlmError::Parse(e) => OracleUnavailable::Malformed(e.to_string()),
        LlmError::EmptyContent => {
            OracleUnavailable::Malformed("empty response content".to_string())
        }
    }
}

/// Validates the verdict against the catalog and lifts it into the shared
/// result type. Confidence range checking is the orchestrator's job.
fn verdict_into_result(
    verdict: OracleVerdict,
    catalog: &RoleCatalog,
) -> Result<ClassificationResult, OracleUnavailable> {
    if !catalog.contains(&verdict.category) {
        return Err(OracleUnavailable::UnknownCategory(verdict.category));
    }
    Ok(ClassificationResult {
        category_id: verdict.category,
        confidence: verdict.confidence,
        key_technologies: verdict.technologies,
        reasoning: verdict.reasoning,
        source: ClassificationSource::Ai,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_verdict(category: &str) -> OracleVerdict {
        OracleVerdict {
            category: category.to_string(),
            confidence: 0.9,
            technologies: vec!["Kubernetes".to_string()],
            reasoning: "infrastructure-centered posting".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_resolve_to_unavailable() {
        let catalog = RoleCatalog::builtin();
        let oracle = AnthropicOracle::new(&OracleConfig::default());

        let outcome = oracle.classify("any posting", &catalog).await;
        assert!(matches!(
            outcome,
            Err(OracleUnavailable::MissingCredentials)
        ));
    }

    #[test]
    fn test_unknown_category_is_rejected_not_substituted() {
        let catalog = RoleCatalog::builtin();
        let outcome = verdict_into_result(make_verdict("underwater_basket_weaver"), &catalog);
        assert!(matches!(
            outcome,
            Err(OracleUnavailable::UnknownCategory(id)) if id == "underwater_basket_weaver"
        ));
    }

    #[test]
    fn test_valid_verdict_becomes_ai_sourced_result() {
        let catalog = RoleCatalog::builtin();
        let result = verdict_into_result(make_verdict("devops_engineer"), &catalog).unwrap();

        assert_eq!(result.category_id, "devops_engineer");
        assert_eq!(result.source, ClassificationSource::Ai);
        assert_eq!(result.key_technologies, vec!["Kubernetes"]);
        assert!((result.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_llm_errors_map_to_unavailability_not_panics() {
        let api = unavailable_from_llm(LlmError::Api {
            status: 529,
            message: "overloaded".to_string(),
        });
        assert!(matches!(api, OracleUnavailable::Transport(_)));

        let empty = unavailable_from_llm(LlmError::EmptyContent);
        assert!(matches!(empty, OracleUnavailable::Malformed(_)));
    }

    #[test]
    fn test_prompt_carries_jd_text_and_every_category_id() {
        let catalog = RoleCatalog::builtin();
        let prompt = AnthropicOracle::build_prompt("We need a platform engineer.", &catalog);

        assert!(prompt.contains("We need a platform engineer."));
        for id in catalog.ids() {
            assert!(prompt.contains(id), "prompt must list '{id}'");
        }
    }

    #[test]
    fn test_verdict_parses_from_strict_json() {
        let json = r#"{
            "category": "data_engineer",
            "confidence": 0.8,
            "technologies": ["Spark", "Airflow"],
            "reasoning": "pipeline-heavy posting"
        }"#;
        let verdict: OracleVerdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.category, "data_engineer");
        assert_eq!(verdict.technologies.len(), 2);
    }
}
