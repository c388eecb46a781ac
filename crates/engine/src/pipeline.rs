//! Build Orchestrator — the engine's public entry point. Classifies the
//! posting once, resolves both template kinds for the winning category, and
//! runs the customizer twice with a shared context.

use std::sync::Arc;

use tracing::info;

use crate::catalog::RoleCatalog;
use crate::classify::orchestrator::Classifier;
use crate::customize::{self, summary, CustomizeWarning};
use crate::identity;
use crate::models::{ClassificationResult, CustomizationContext, DocumentKind, JobDescription};
use crate::templates::TemplateRegistry;

/// One document-generation request.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub job_text: String,
    /// Metadata only; never fetched or parsed.
    pub source_url: Option<String>,
    /// Manual override — takes precedence over automatic extraction.
    pub company: Option<String>,
    /// Manual override — takes precedence over automatic extraction.
    pub job_title: Option<String>,
}

impl BuildRequest {
    pub fn new(job_text: impl Into<String>) -> Self {
        Self {
            job_text: job_text.into(),
            ..Self::default()
        }
    }
}

/// Both customized documents plus the metadata a reviewer needs to judge
/// them without reading logs.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub cv: String,
    pub cover_letter: String,
    pub classification: ClassificationResult,
    /// True when either document was produced from the default category's
    /// template instead of the winning category's own.
    pub used_fallback_template: bool,
    /// True when neither manual input nor extraction produced a usable
    /// company and title; the documents then carry review sentinels.
    pub requires_manual_input: bool,
    pub warnings: Vec<CustomizeWarning>,
}

pub struct DocumentBuilder {
    catalog: Arc<RoleCatalog>,
    classifier: Classifier,
    templates: TemplateRegistry,
}

impl DocumentBuilder {
    pub fn new(
        catalog: Arc<RoleCatalog>,
        classifier: Classifier,
        templates: TemplateRegistry,
    ) -> Self {
        Self {
            catalog,
            classifier,
            templates,
        }
    }

    /// Builds the CV/cover-letter pair for one posting. Total: every
    /// recoverable failure becomes a fallback or a flag on the output.
    pub async fn build(&self, request: BuildRequest) -> BuildOutput {
        let jd = JobDescription {
            text: request.job_text,
            source_url: request.source_url,
        };

        let classification = self.classifier.classify(&jd).await;

        let company = request
            .company
            .or_else(|| identity::extract_company(&jd.text));
        let job_title = request
            .job_title
            .or_else(|| identity::extract_job_title(&jd.text));
        let requires_manual_input = company.is_none() || job_title.is_none();

        let role_display_name = self
            .catalog
            .get(&classification.category_id)
            .map(|c| c.display_name.clone())
            .unwrap_or_else(|| self.catalog.default_category().display_name.clone());

        let ctx = CustomizationContext {
            company,
            job_title,
            role_display_name,
            key_technologies: classification.key_technologies.clone(),
            focus_clause: summary::derive_focus_clause(&jd.text, &classification.key_technologies),
        };

        let cv_template = self
            .templates
            .resolve(&classification.category_id, DocumentKind::Cv);
        let cover_template = self
            .templates
            .resolve(&classification.category_id, DocumentKind::CoverLetter);
        let used_fallback_template = cv_template.used_fallback || cover_template.used_fallback;

        let cv = customize::customize(&cv_template.text, &ctx);
        let cover_letter = customize::customize(&cover_template.text, &ctx);

        let mut warnings = cv.warnings;
        warnings.extend(cover_letter.warnings);

        info!(
            category = %classification.category_id,
            confidence = classification.confidence,
            source = ?classification.source,
            used_fallback_template,
            requires_manual_input,
            "document build complete"
        );

        BuildOutput {
            cv: cv.text,
            cover_letter: cover_letter.text,
            classification,
            used_fallback_template,
            requires_manual_input,
            warnings,
        }
    }
}
