//! Template Registry — resolves a role category to concrete template text,
//! falling back to the default category's template when a specific one is
//! absent. The engine reads from an external template store (file tree or
//! content store) that it does not manage.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::catalog::RoleCatalog;
use crate::errors::EngineError;
use crate::models::DocumentKind;

#[derive(Debug, Error)]
pub enum TemplateSourceError {
    #[error("template '{0}' not found")]
    NotFound(String),

    #[error("failed to read template '{path}': {message}")]
    Unreadable { path: String, message: String },
}

/// External template store the engine reads from.
pub trait TemplateSource: Send + Sync {
    fn load(&self, path: &str) -> Result<String, TemplateSourceError>;
}

/// File-tree store: template paths are relative to a root directory.
pub struct FsTemplateSource {
    root: PathBuf,
}

impl FsTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for FsTemplateSource {
    fn load(&self, path: &str) -> Result<String, TemplateSourceError> {
        let full = self.root.join(path);
        if !full.is_file() {
            return Err(TemplateSourceError::NotFound(path.to_string()));
        }
        std::fs::read_to_string(&full).map_err(|e| TemplateSourceError::Unreadable {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

/// In-memory store, for content-store deployments and tests.
#[derive(Debug, Default)]
pub struct MemoryTemplateSource {
    entries: HashMap<String, String>,
}

impl MemoryTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(path.into(), text.into());
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn load(&self, path: &str) -> Result<String, TemplateSourceError> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| TemplateSourceError::NotFound(path.to_string()))
    }
}

/// A resolved template plus the metadata callers need to judge it.
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub text: String,
    /// The category whose template was actually served.
    pub category_id: String,
    pub used_fallback: bool,
}

pub struct TemplateRegistry {
    catalog: Arc<RoleCatalog>,
    source: Box<dyn TemplateSource>,
    default_cv: String,
    default_cover_letter: String,
}

impl TemplateRegistry {
    /// Eagerly verifies and caches the default category's templates. A
    /// failure here is a fatal configuration error and must abort startup.
    /// It is the only error this module ever surfaces, and it makes
    /// `resolve` infallible afterwards.
    pub fn new(
        catalog: Arc<RoleCatalog>,
        source: Box<dyn TemplateSource>,
    ) -> Result<Self, EngineError> {
        let (cv_path, cover_letter_path) = {
            let default = catalog.default_category();
            (
                default.cv_template.clone(),
                default.cover_letter_template.clone(),
            )
        };

        let default_cv = source.load(&cv_path).map_err(|e| {
            EngineError::Configuration(format!("default CV template unavailable: {e}"))
        })?;
        let default_cover_letter = source.load(&cover_letter_path).map_err(|e| {
            EngineError::Configuration(format!("default cover-letter template unavailable: {e}"))
        })?;

        Ok(Self {
            catalog,
            source,
            default_cv,
            default_cover_letter,
        })
    }

    /// Resolves a template for `(category_id, kind)`. Unknown categories
    /// and missing or unreadable templates fall back to the default
    /// category's cached copy, recorded in `used_fallback`.
    pub fn resolve(&self, category_id: &str, kind: DocumentKind) -> ResolvedTemplate {
        let Some(category) = self.catalog.get(category_id) else {
            warn!(
                category = category_id,
                "unknown category; serving default template"
            );
            return self.default_template(kind);
        };

        match self.source.load(category.template_path(kind)) {
            Ok(text) => ResolvedTemplate {
                text,
                category_id: category.id.clone(),
                used_fallback: false,
            },
            Err(e) => {
                warn!(
                    category = category_id,
                    kind = kind.as_str(),
                    error = %e,
                    "template missing; serving default template"
                );
                self.default_template(kind)
            }
        }
    }

    fn default_template(&self, kind: DocumentKind) -> ResolvedTemplate {
        let text = match kind {
            DocumentKind::Cv => self.default_cv.clone(),
            DocumentKind::CoverLetter => self.default_cover_letter.clone(),
        };
        ResolvedTemplate {
            text,
            category_id: self.catalog.default_id().to_string(),
            used_fallback: true,
        }
    }
}
