//! Role Category Registry — the static catalog of role buckets the engine
//! classifies into. Pure data: scoring lives in `classify::keyword`.
//!
//! The catalog is validated once at construction, shared as
//! `Arc<RoleCatalog>`, and never mutated for the life of the process.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::DocumentKind;

/// A weighted keyword phrase. `term` carries display casing ("React",
/// "MLOps"); matching normalizes both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCategory {
    pub id: String,
    pub display_name: String,
    pub keywords: Vec<Keyword>,
    /// Tie-break rank — lower wins when raw scores are equal.
    pub priority: u8,
    /// Percentage gate: minimum share of the total matched weight this
    /// category must reach before it may win. `None` = ungated. Gating
    /// keeps a posting that merely mentions AI APIs out of the specialized
    /// AI category.
    pub min_share: Option<f32>,
    pub cv_template: String,
    pub cover_letter_template: String,
}

impl RoleCategory {
    pub fn template_path(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Cv => &self.cv_template,
            DocumentKind::CoverLetter => &self.cover_letter_template,
        }
    }
}

/// Immutable, validated catalog of role categories.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    categories: Vec<RoleCategory>,
    default_index: usize,
}

impl RoleCatalog {
    /// Validates that ids are unique and the default category exists.
    pub fn new(
        categories: Vec<RoleCategory>,
        default_id: &str,
    ) -> Result<Self, EngineError> {
        let mut seen = std::collections::HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(EngineError::Catalog(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
        }

        let default_index = categories
            .iter()
            .position(|c| c.id == default_id)
            .ok_or_else(|| {
                EngineError::Catalog(format!(
                    "default category '{default_id}' is not in the catalog"
                ))
            })?;

        Ok(Self {
            categories,
            default_index,
        })
    }

    pub fn get(&self, id: &str) -> Option<&RoleCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn default_category(&self) -> &RoleCategory {
        &self.categories[self.default_index]
    }

    pub fn default_id(&self) -> &str {
        &self.categories[self.default_index].id
    }

    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleCategory> {
        self.categories.iter()
    }

    /// The built-in catalog. The AI category is deliberately the only gated
    /// one: it must carry at least half of the total matched weight before
    /// it can win.
    pub fn builtin() -> Self {
        let categories = vec![
            category(
                "ai_engineer",
                "AI Engineer",
                1,
                Some(0.5),
                &[
                    ("MLOps", 3.0),
                    ("RAG", 3.0),
                    ("fine-tune", 3.0),
                    ("vector database", 3.0),
                    ("LLM", 3.0),
                    ("model training", 3.0),
                    ("large language model", 2.5),
                    ("prompt engineering", 2.5),
                    ("machine learning", 2.5),
                    ("PyTorch", 2.5),
                    ("TensorFlow", 2.0),
                    ("embeddings", 2.0),
                    ("Hugging Face", 2.0),
                    ("LangChain", 2.0),
                    ("OpenAI", 2.0),
                    ("inference", 1.5),
                    ("GPU", 1.5),
                    ("AI", 1.0),
                ],
            ),
            category(
                "fullstack_engineer",
                "Full-Stack Engineer",
                2,
                None,
                &[
                    ("full-stack", 2.5),
                    ("React", 2.0),
                    ("TypeScript", 2.0),
                    ("Python", 2.0),
                    ("Node.js", 2.0),
                    ("JavaScript", 1.5),
                    ("software engineer", 1.5),
                    ("REST API", 1.5),
                    ("web application", 1.5),
                    ("GraphQL", 1.5),
                    ("frontend", 1.2),
                    ("backend", 1.2),
                    ("SQL", 1.0),
                    ("agile", 0.8),
                ],
            ),
            category(
                "backend_engineer",
                "Backend Engineer",
                3,
                None,
                &[
                    ("microservices", 2.5),
                    ("distributed systems", 2.5),
                    ("Golang", 2.0),
                    ("Java", 2.0),
                    ("Rust", 2.0),
                    ("gRPC", 2.0),
                    ("Kafka", 2.0),
                    ("API design", 2.0),
                    ("PostgreSQL", 1.8),
                    ("concurrency", 1.8),
                    ("Redis", 1.5),
                    ("scalability", 1.5),
                    ("C#", 1.5),
                    ("Spring", 1.5),
                ],
            ),
            category(
                "frontend_engineer",
                "Frontend Engineer",
                3,
                None,
                &[
                    ("React", 2.2),
                    ("CSS", 2.0),
                    ("Vue", 2.0),
                    ("Angular", 2.0),
                    ("Next.js", 2.0),
                    ("accessibility", 2.0),
                    ("responsive design", 2.0),
                    ("design system", 1.8),
                    ("HTML", 1.5),
                    ("UI", 1.5),
                    ("UX", 1.5),
                    ("Tailwind", 1.5),
                    ("webpack", 1.2),
                ],
            ),
            category(
                "devops_engineer",
                "DevOps Engineer",
                3,
                None,
                &[
                    ("Kubernetes", 2.8),
                    ("Terraform", 2.8),
                    ("CI/CD", 2.5),
                    ("infrastructure as code", 2.5),
                    ("SRE", 2.5),
                    ("Docker", 2.0),
                    ("Ansible", 2.0),
                    ("observability", 2.0),
                    ("AWS", 1.8),
                    ("GCP", 1.8),
                    ("Prometheus", 1.8),
                    ("incident response", 1.8),
                    ("Linux", 1.2),
                ],
            ),
            category(
                "data_engineer",
                "Data Engineer",
                3,
                None,
                &[
                    ("Spark", 2.8),
                    ("Airflow", 2.8),
                    ("ETL", 2.5),
                    ("data pipeline", 2.5),
                    ("data warehouse", 2.2),
                    ("Snowflake", 2.2),
                    ("dbt", 2.2),
                    ("BigQuery", 2.0),
                    ("data modeling", 2.0),
                    ("streaming", 1.5),
                    ("SQL", 1.5),
                    ("Scala", 1.5),
                ],
            ),
        ];

        Self::new(categories, "fullstack_engineer").expect("built-in catalog is consistent")
    }
}

fn category(
    id: &str,
    display_name: &str,
    priority: u8,
    min_share: Option<f32>,
    keywords: &[(&str, f32)],
) -> RoleCategory {
    RoleCategory {
        id: id.to_string(),
        display_name: display_name.to_string(),
        keywords: keywords
            .iter()
            .map(|(term, weight)| Keyword {
                term: term.to_string(),
                weight: *weight,
            })
            .collect(),
        priority,
        min_share,
        cv_template: format!("{id}/cv.tex"),
        cover_letter_template: format!("{id}/cover_letter.tex"),
    }
}
