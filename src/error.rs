use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{url} does not look like an Argo CD server (unexpected /api/version response)")]
    NotArgo { url: String },

    #[error("Argo CD API error: {url} returned status {status}")]
    Api { url: String, status: u16 },

    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
