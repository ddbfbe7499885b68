use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuNutritionError {
    #[error("Malformed menu input: {0}")]
    MalformedMenu(String),

    #[error("Could not parse nutrition estimate for '{item}': {detail}")]
    MalformedEstimate { item: String, detail: String },

    #[error("Estimation service returned status {status}: {body}")]
    EstimatorService { status: u16, body: String },

    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, MenuNutritionError>;
