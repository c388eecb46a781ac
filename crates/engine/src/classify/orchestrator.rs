//! Classification Orchestrator — oracle first, keyword fallback. The dual
//! path keeps classification working (deterministically, if less precisely)
//! whenever the oracle is down, misconfigured, or returns something
//! unusable.

use std::sync::Arc;

use tracing::warn;

use crate::catalog::RoleCatalog;
use crate::classify::keyword;
use crate::classify::oracle::OracleClassifier;
use crate::models::{ClassificationResult, JobDescription};

pub struct Classifier {
    catalog: Arc<RoleCatalog>,
    oracle: Option<Arc<dyn OracleClassifier>>,
}

impl Classifier {
    pub fn with_oracle(catalog: Arc<RoleCatalog>, oracle: Arc<dyn OracleClassifier>) -> Self {
        Self {
            catalog,
            oracle: Some(oracle),
        }
    }

    /// Pure keyword operation, for deployments with no oracle configured.
    pub fn keyword_only(catalog: Arc<RoleCatalog>) -> Self {
        Self {
            catalog,
            oracle: None,
        }
    }

    /// Classifies a job description. Total: every oracle failure resolves
    /// to the keyword classifier's result, returned unchanged.
    pub async fn classify(&self, jd: &JobDescription) -> ClassificationResult {
        if let Some(oracle) = &self.oracle {
            match oracle.classify(&jd.text, &self.catalog).await {
                Ok(result) if self.is_plausible(&result) => return result,
                Ok(result) => {
                    warn!(
                        category = %result.category_id,
                        confidence = result.confidence,
                        "oracle verdict failed validation; falling back to keyword scoring"
                    );
                }
                Err(unavailable) => {
                    warn!(error = %unavailable, "oracle unavailable; falling back to keyword scoring");
                }
            }
        }
        keyword::classify(&self.catalog, &jd.text)
    }

    /// Sanity checks on an oracle verdict: known category id, confidence a
    /// finite number in [0, 1].
    fn is_plausible(&self, result: &ClassificationResult) -> bool {
        self.catalog.contains(&result.category_id)
            && result.confidence.is_finite()
            && (0.0..=1.0).contains(&result.confidence)
    }
}
