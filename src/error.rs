use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Recipe unavailable: {0}")]
    RecipeUnavailable(String),
}

impl PlannerError {
    /// Shorthand for building an [`PlannerError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        PlannerError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
