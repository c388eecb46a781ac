//! Request-scoped value types shared across the engine. All of these are
//! created and discarded within a single build call; only the role catalog
//! outlives a request.

use serde::{Deserialize, Serialize};

/// A raw job posting to classify and tailor documents for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub text: String,
    /// Where the posting came from. Metadata only — never fetched or parsed.
    pub source_url: Option<String>,
}

impl JobDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_url: Some(url.into()),
        }
    }
}

/// Which path produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    Ai,
    Keyword,
}

/// Outcome of classifying a job description against the role catalog.
/// Immutable value object, constructed once per classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category_id: String,
    /// Winning category's share of total matched weight, in [0, 1].
    pub confidence: f32,
    /// Matched terms, most relevant first.
    pub key_technologies: Vec<String>,
    pub reasoning: String,
    pub source: ClassificationSource,
}

/// The two document kinds the engine customizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Cv,
    CoverLetter,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Cv => "cv",
            DocumentKind::CoverLetter => "cover_letter",
        }
    }
}

/// Read-only inputs to a customization run. Built once per build call and
/// shared by the CV and cover-letter passes.
#[derive(Debug, Clone)]
pub struct CustomizationContext {
    pub company: Option<String>,
    pub job_title: Option<String>,
    /// Display name of the winning role category.
    pub role_display_name: String,
    /// From the classification, most relevant first.
    pub key_technologies: Vec<String>,
    /// One clause lifted verbatim from the posting, quoted in the summary.
    pub focus_clause: Option<String>,
}
