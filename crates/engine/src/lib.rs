//! Job-description classification & document customization engine.
//!
//! Given an unstructured job posting, the engine classifies the role into a
//! category from an immutable catalog (an AI oracle first, deterministic
//! keyword scoring as fallback), resolves that category's CV and
//! cover-letter templates, and rewrites them for the posting: identity
//! placeholders, a regenerated summary, and relevance-ordered skills. The
//! templates' structural markup is never interpreted or validated.
//!
//! The engine is request-scoped and stateless between calls; it owns no
//! network ports, storage, or rendering. Retrieval, PDF/LaTeX compilation,
//! persistence, and delivery belong to the surrounding application.
//! [`DocumentBuilder`] is the public entry point.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod customize;
pub mod errors;
pub mod identity;
mod llm_client;
pub mod models;
pub mod pipeline;
pub mod templates;

pub use catalog::{Keyword, RoleCatalog, RoleCategory};
pub use classify::oracle::{AnthropicOracle, OracleClassifier, OracleUnavailable};
pub use classify::orchestrator::Classifier;
pub use config::OracleConfig;
pub use customize::{customize, CustomizeWarning, CustomizedDocument};
pub use errors::EngineError;
pub use models::{
    ClassificationResult, ClassificationSource, CustomizationContext, DocumentKind, JobDescription,
};
pub use pipeline::{BuildOutput, BuildRequest, DocumentBuilder};
pub use templates::{
    FsTemplateSource, MemoryTemplateSource, ResolvedTemplate, TemplateRegistry, TemplateSource,
};
