use thiserror::Error;

/// Fatal, construction-time errors. Everything recoverable in the engine is
/// absorbed into a fallback path or a flagged-but-successful result; only
/// these may propagate, and only before the first request is served.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The role catalog is internally inconsistent (duplicate ids, missing
    /// default category).
    #[error("role catalog error: {0}")]
    Catalog(String),

    /// The default category's templates could not be resolved at startup.
    #[error("template configuration error: {0}")]
    Configuration(String),
}
