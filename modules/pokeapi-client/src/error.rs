use thiserror::Error;

pub type Result<T> = std::result::Result<T, PokeApiError>;

#[derive(Debug, Error)]
pub enum PokeApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for PokeApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PokeApiError::Parse(err.to_string())
        } else {
            PokeApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PokeApiError {
    fn from(err: serde_json::Error) -> Self {
        PokeApiError::Parse(err.to_string())
    }
}
